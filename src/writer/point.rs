use geo_traits::{CoordTrait, PointTrait};

use crate::cursor::SliceWriter;

/// Write the body of a point record: two doubles, `(NaN, NaN)` for the empty
/// point.
///
/// This is the one shape strict WKB cannot encode when empty, which is why
/// point bodies are never delegated to a WKB writer.
pub fn write_point(out: &mut SliceWriter, geom: &impl PointTrait<T = f64>) {
    match geom.coord() {
        Some(coord) if !coord.x().is_nan() && !coord.y().is_nan() => {
            out.write_f64(coord.x());
            out.write_f64(coord.y());
        }
        _ => {
            out.write_f64(f64::NAN);
            out.write_f64(f64::NAN);
        }
    }
}

#[cfg(test)]
mod test {
    use geo::Geometry;

    use crate::tag::GeometryTag;
    use crate::test::point::{p0, p_empty};
    use crate::writer::serialize;

    #[test]
    fn point_record_is_17_bytes() {
        let buf = serialize(&Geometry::Point(p0())).unwrap();
        assert_eq!(buf.len(), GeometryTag::Point.serialized_size().unwrap());
        assert_eq!(buf[0], GeometryTag::Point.code());
    }

    #[test]
    fn empty_point_serializes_as_nan_pair() {
        let buf = serialize(&Geometry::Point(p_empty())).unwrap();
        assert_eq!(buf.len(), 17);
        assert!(f64::from_le_bytes(buf[1..9].try_into().unwrap()).is_nan());
        assert!(f64::from_le_bytes(buf[9..17].try_into().unwrap()).is_nan());
    }
}
