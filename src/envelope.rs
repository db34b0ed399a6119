//! The minimum bounding rectangle of a geometry.

use geo_traits::{
    CoordTrait, GeometryCollectionTrait, GeometryTrait, GeometryType, LineStringTrait, LineTrait,
    MultiLineStringTrait, MultiPointTrait, MultiPolygonTrait, PointTrait, PolygonTrait, RectTrait,
    TriangleTrait,
};
use geo_types::{Coord, Rect};

/// An axis-aligned minimum bounding rectangle, or the empty envelope.
///
/// The empty envelope is stored as `NaN` in all four bounds, which is also
/// its wire representation; any `NaN` component makes an envelope read as
/// empty. Non-empty envelopes have finite bounds with `minx <= maxx` and
/// `miny <= maxy`.
#[derive(Debug, Clone, Copy)]
pub struct Envelope {
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

impl Envelope {
    /// The empty envelope.
    pub fn empty() -> Self {
        Self {
            minx: f64::NAN,
            miny: f64::NAN,
            maxx: f64::NAN,
            maxy: f64::NAN,
        }
    }

    /// A new envelope from its four bounds.
    ///
    /// A `NaN` in any component collapses to the empty envelope.
    pub fn new(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Self {
        if minx.is_nan() || miny.is_nan() || maxx.is_nan() || maxy.is_nan() {
            return Self::empty();
        }
        Self {
            minx,
            miny,
            maxx,
            maxy,
        }
    }

    /// Compute the envelope of a geometry by walking its vertices.
    ///
    /// Empty points contribute nothing; a geometry with no finite vertices
    /// has the empty envelope.
    pub fn of(geom: &impl GeometryTrait<T = f64>) -> Self {
        let mut bounds = Bounds::new();
        bounds.add_geometry(geom);
        bounds.finish()
    }

    /// Whether this is the empty envelope.
    pub fn is_empty(&self) -> bool {
        self.minx.is_nan() || self.miny.is_nan() || self.maxx.is_nan() || self.maxy.is_nan()
    }

    /// The minimum x bound. `NaN` when empty.
    pub fn minx(&self) -> f64 {
        self.minx
    }

    /// The minimum y bound. `NaN` when empty.
    pub fn miny(&self) -> f64 {
        self.miny
    }

    /// The maximum x bound. `NaN` when empty.
    pub fn maxx(&self) -> f64 {
        self.maxx
    }

    /// The maximum y bound. `NaN` when empty.
    pub fn maxy(&self) -> f64 {
        self.maxy
    }

    /// Widen this envelope so that it also covers `other`.
    ///
    /// Extending by an empty envelope has no effect; extending an empty
    /// envelope by a non-empty one takes the other's bounds.
    pub fn extend(&mut self, other: &Envelope) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }
        self.minx = self.minx.min(other.minx);
        self.miny = self.miny.min(other.miny);
        self.maxx = self.maxx.max(other.maxx);
        self.maxy = self.maxy.max(other.maxy);
    }

    /// The non-empty envelope as a `Rect`, or `None` when empty.
    pub fn to_rect(&self) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }
        Some(Rect::new(
            Coord {
                x: self.minx,
                y: self.miny,
            },
            Coord {
                x: self.maxx,
                y: self.maxy,
            },
        ))
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.minx == other.minx
            && self.miny == other.miny
            && self.maxx == other.maxx
            && self.maxy == other.maxy
    }
}

impl From<Rect> for Envelope {
    fn from(value: Rect) -> Self {
        Envelope::new(value.min().x, value.min().y, value.max().x, value.max().y)
    }
}

/// Accumulates coordinate extrema during a vertex walk.
///
/// The initial state is `(+inf, +inf, -inf, -inf)`; `NaN` coordinates fall
/// through every comparison and leave the state unchanged, which is how empty
/// points inside collections are skipped.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bounds {
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
}

impl Bounds {
    pub fn new() -> Self {
        Bounds {
            minx: f64::INFINITY,
            miny: f64::INFINITY,
            maxx: f64::NEG_INFINITY,
            maxy: f64::NEG_INFINITY,
        }
    }

    pub fn add_coord(&mut self, coord: &impl CoordTrait<T = f64>) {
        let x = coord.x();
        let y = coord.y();
        if x < self.minx {
            self.minx = x;
        }
        if y < self.miny {
            self.miny = y;
        }
        if x > self.maxx {
            self.maxx = x;
        }
        if y > self.maxy {
            self.maxy = y;
        }
    }

    pub fn add_point(&mut self, point: &impl PointTrait<T = f64>) {
        if let Some(coord) = point.coord() {
            self.add_coord(&coord);
        }
    }

    pub fn add_line_string(&mut self, line_string: &impl LineStringTrait<T = f64>) {
        for coord in line_string.coords() {
            self.add_coord(&coord);
        }
    }

    pub fn add_polygon(&mut self, polygon: &impl PolygonTrait<T = f64>) {
        if let Some(exterior) = polygon.exterior() {
            self.add_line_string(&exterior);
        }
        for interior in polygon.interiors() {
            self.add_line_string(&interior);
        }
    }

    pub fn add_multi_point(&mut self, multi_point: &impl MultiPointTrait<T = f64>) {
        for point in multi_point.points() {
            self.add_point(&point);
        }
    }

    pub fn add_multi_line_string(&mut self, multi_line_string: &impl MultiLineStringTrait<T = f64>) {
        for line_string in multi_line_string.line_strings() {
            self.add_line_string(&line_string);
        }
    }

    pub fn add_multi_polygon(&mut self, multi_polygon: &impl MultiPolygonTrait<T = f64>) {
        for polygon in multi_polygon.polygons() {
            self.add_polygon(&polygon);
        }
    }

    pub fn add_geometry_collection(
        &mut self,
        geometry_collection: &impl GeometryCollectionTrait<T = f64>,
    ) {
        for geometry in geometry_collection.geometries() {
            self.add_geometry(&geometry);
        }
    }

    pub fn add_rect(&mut self, rect: &impl RectTrait<T = f64>) {
        self.add_coord(&rect.min());
        self.add_coord(&rect.max());
    }

    pub fn add_geometry(&mut self, geometry: &impl GeometryTrait<T = f64>) {
        match geometry.as_type() {
            GeometryType::Point(g) => self.add_point(g),
            GeometryType::LineString(g) => self.add_line_string(g),
            GeometryType::Polygon(g) => self.add_polygon(g),
            GeometryType::MultiPoint(g) => self.add_multi_point(g),
            GeometryType::MultiLineString(g) => self.add_multi_line_string(g),
            GeometryType::MultiPolygon(g) => self.add_multi_polygon(g),
            GeometryType::GeometryCollection(g) => self.add_geometry_collection(g),
            GeometryType::Rect(g) => self.add_rect(g),
            GeometryType::Triangle(g) => {
                self.add_coord(&g.first());
                self.add_coord(&g.second());
                self.add_coord(&g.third());
            }
            GeometryType::Line(g) => {
                self.add_coord(&g.start());
                self.add_coord(&g.end());
            }
        }
    }

    pub fn update(&mut self, envelope: &Envelope) {
        if envelope.is_empty() {
            return;
        }
        self.minx = self.minx.min(envelope.minx);
        self.miny = self.miny.min(envelope.miny);
        self.maxx = self.maxx.max(envelope.maxx);
        self.maxy = self.maxy.max(envelope.maxy);
    }

    pub fn merge(&mut self, other: &Bounds) {
        self.minx = self.minx.min(other.minx);
        self.miny = self.miny.min(other.miny);
        self.maxx = self.maxx.max(other.maxx);
        self.maxy = self.maxy.max(other.maxy);
    }

    pub fn is_empty(&self) -> bool {
        !self.minx.is_finite()
            || !self.miny.is_finite()
            || !self.maxx.is_finite()
            || !self.maxy.is_finite()
    }

    pub fn finish(&self) -> Envelope {
        if self.is_empty() {
            Envelope::empty()
        } else {
            Envelope::new(self.minx, self.miny, self.maxx, self.maxy)
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use geo::{Geometry, Point};

    use super::*;
    use crate::test::{geometrycollection, multipoint, polygon};

    #[test]
    fn envelope_of_polygon_includes_holes_vertices() {
        let env = Envelope::of(&Geometry::Polygon(polygon::poly1()));
        assert_eq!(env, Envelope::new(0., 0., 10., 10.));
    }

    #[test]
    fn envelope_of_multipoint() {
        let env = Envelope::of(&Geometry::MultiPoint(multipoint::mp0()));
        assert_eq!(env, Envelope::new(1., 1., 2., 2.));
    }

    #[test]
    fn envelope_of_point_is_degenerate() {
        let env = Envelope::of(&Geometry::Point(Point::new(3., 4.)));
        assert_eq!(env, Envelope::new(3., 4., 3., 4.));
        assert_eq!(env.minx(), env.maxx());
    }

    #[test]
    fn empty_geometries_have_empty_envelopes() {
        assert!(Envelope::of(&Geometry::Point(crate::empty_point())).is_empty());
        assert!(Envelope::of(&Geometry::GeometryCollection(
            geo::GeometryCollection::default()
        ))
        .is_empty());
        assert!(Envelope::of(&Geometry::GeometryCollection(
            geometrycollection::gc_empty_points()
        ))
        .is_empty());
    }

    #[test]
    fn nan_bound_reads_as_empty() {
        assert!(Envelope::new(f64::NAN, 0., 1., 1.).is_empty());
        assert_eq!(Envelope::new(f64::NAN, 0., 1., 1.), Envelope::empty());
    }

    #[test]
    fn extend_unions_bounds() {
        let mut env = Envelope::empty();
        env.extend(&Envelope::empty());
        assert!(env.is_empty());

        env.extend(&Envelope::new(0., 0., 1., 1.));
        assert_eq!(env, Envelope::new(0., 0., 1., 1.));

        env.extend(&Envelope::new(-1., 2., 0.5, 3.));
        assert_eq!(env, Envelope::new(-1., 0., 1., 3.));

        env.extend(&Envelope::empty());
        assert_eq!(env, Envelope::new(-1., 0., 1., 3.));
    }

    #[test]
    fn rect_round_trip() {
        let env = Envelope::new(1., 2., 3., 4.);
        let rect = env.to_rect().unwrap();
        assert_eq!(Envelope::from(rect), env);
        assert_eq!(Envelope::empty().to_rect(), None);
    }
}
