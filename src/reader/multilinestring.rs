use geo_types::MultiLineString;

use crate::cursor::SliceReader;
use crate::error::GeoSliceResult;
use crate::reader::coord::read_count_bounded;
use crate::reader::linestring::read_line_string;

/// Read a multi-line-string body.
pub fn read_multi_line_string(input: &mut SliceReader) -> GeoSliceResult<MultiLineString> {
    // each member carries at least its own 4-byte count
    let count = read_count_bounded(input, 4)?;
    let mut line_strings = Vec::with_capacity(count);
    for _ in 0..count {
        line_strings.push(read_line_string(input)?);
    }
    Ok(MultiLineString::new(line_strings))
}
