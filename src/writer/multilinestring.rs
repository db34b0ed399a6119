use geo_traits::MultiLineStringTrait;

use crate::cursor::SliceWriter;
use crate::error::GeoSliceResult;
use crate::writer::{checked_i32, write_coordinate_sequence};

/// Write the body of a multi-line-string record: a count followed by one
/// coordinate sequence per polyline.
pub fn write_multi_line_string(
    out: &mut SliceWriter,
    geom: &impl MultiLineStringTrait<T = f64>,
) -> GeoSliceResult<()> {
    out.write_i32(checked_i32(geom.num_line_strings())?);
    for line_string in geom.line_strings() {
        write_coordinate_sequence(out, &line_string)?;
    }
    Ok(())
}
