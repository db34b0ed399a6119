use geo_types::Point;

use crate::cursor::SliceReader;
use crate::envelope::Envelope;
use crate::error::GeoSliceResult;
use crate::reader::coord::read_coordinate;

/// The empty point.
///
/// `geo_types` has no dedicated empty-point representation, so this crate
/// defines it: a point with `NaN` in both coordinates. This is the value the
/// decoder returns for an empty point record and the value the encoder
/// recognizes as empty.
pub fn empty_point() -> Point {
    Point::new(f64::NAN, f64::NAN)
}

/// Read a point body. A `NaN` in either coordinate yields the empty point.
pub fn read_point(input: &mut SliceReader) -> GeoSliceResult<Point> {
    let coord = read_coordinate(input)?;
    if coord.x.is_nan() || coord.y.is_nan() {
        Ok(empty_point())
    } else {
        Ok(Point::from(coord))
    }
}

/// The envelope of a point record: degenerate at the point's coordinates,
/// empty for the empty point.
pub(crate) fn read_point_envelope(input: &mut SliceReader) -> GeoSliceResult<Envelope> {
    let coord = read_coordinate(input)?;
    if coord.x.is_nan() || coord.y.is_nan() {
        Ok(Envelope::empty())
    } else {
        Ok(Envelope::new(coord.x, coord.y, coord.x, coord.y))
    }
}
