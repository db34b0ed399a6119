use geo::{Geometry, GeometryCollection};

use crate::test::{linestring, multipoint, point, polygon};

pub(crate) fn gc0() -> GeometryCollection<f64> {
    GeometryCollection::from(vec![
        Geometry::Point(point::p0()),
        Geometry::LineString(linestring::ls1()),
        Geometry::Polygon(polygon::poly1()),
        Geometry::MultiPoint(multipoint::mp0()),
    ])
}

pub(crate) fn gc_nested() -> GeometryCollection<f64> {
    GeometryCollection::from(vec![
        Geometry::GeometryCollection(gc0()),
        Geometry::Point(point::p1()),
        Geometry::GeometryCollection(GeometryCollection::default()),
    ])
}

pub(crate) fn gc_empty_points() -> GeometryCollection<f64> {
    GeometryCollection::from(vec![
        Geometry::Point(point::p_empty()),
        Geometry::Point(point::p_empty()),
    ])
}
