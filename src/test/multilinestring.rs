use geo::{line_string, MultiLineString};

pub(crate) fn mls0() -> MultiLineString {
    MultiLineString::new(vec![
        line_string![
            (x: 0., y: 0.),
            (x: 1., y: 1.)
        ],
        line_string![
            (x: 2., y: 2.),
            (x: 3., y: 3.),
            (x: 4., y: 2.)
        ],
    ])
}
