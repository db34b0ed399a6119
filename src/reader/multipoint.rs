use geo_types::MultiPoint;

use crate::cursor::SliceReader;
use crate::error::GeoSliceResult;
use crate::reader::coord::read_count_bounded;
use crate::reader::point::read_point;

const POINT_WIDTH: u64 = 2 * 8;

/// Read a multi-point body. Member points with `NaN` coordinates come back
/// as empty points.
pub fn read_multi_point(input: &mut SliceReader) -> GeoSliceResult<MultiPoint> {
    let count = read_count_bounded(input, POINT_WIDTH)?;
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        points.push(read_point(input)?);
    }
    Ok(MultiPoint::new(points))
}

#[cfg(test)]
mod test {
    use geo::Geometry;

    use crate::reader::deserialize;
    use crate::test::multipoint::mp_with_empty;
    use crate::writer::serialize;

    #[test]
    fn empty_members_survive_round_trip() {
        let buf = serialize(&Geometry::MultiPoint(mp_with_empty())).unwrap();
        match deserialize(&buf).unwrap() {
            Geometry::MultiPoint(mp) => {
                assert_eq!(mp.0.len(), 3);
                assert_eq!(mp.0[0], geo::point!(x: 1., y: 1.));
                assert!(mp.0[1].x().is_nan() && mp.0[1].y().is_nan());
                assert_eq!(mp.0[2], geo::point!(x: 2., y: 2.));
            }
            other => panic!("expected a multi-point, got {other:?}"),
        }
    }
}
