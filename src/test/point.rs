use geo::{point, Point};

pub(crate) fn p0() -> Point {
    point!(
        x: 1., y: 2.
    )
}

pub(crate) fn p1() -> Point {
    point!(
        x: 3., y: 4.
    )
}

pub(crate) fn p_empty() -> Point {
    crate::empty_point()
}
