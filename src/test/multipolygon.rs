use geo::MultiPolygon;

use crate::test::polygon::{poly0, poly1};

pub(crate) fn mpoly0() -> MultiPolygon {
    MultiPolygon::new(vec![poly0(), poly1()])
}
