use geo_types::LineString;

use crate::cursor::SliceReader;
use crate::error::GeoSliceResult;
use crate::reader::coord::read_coordinate_sequence;

/// Read a line string body.
pub fn read_line_string(input: &mut SliceReader) -> GeoSliceResult<LineString> {
    Ok(LineString::new(read_coordinate_sequence(input)?))
}
