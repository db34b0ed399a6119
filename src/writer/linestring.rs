use geo_traits::{CoordTrait, LineStringTrait};

use crate::cursor::SliceWriter;
use crate::error::GeoSliceResult;
use crate::writer::checked_i32;

/// Write a coordinate sequence: an i32 count followed by interleaved x/y
/// pairs.
pub fn write_coordinate_sequence(
    out: &mut SliceWriter,
    line: &impl LineStringTrait<T = f64>,
) -> GeoSliceResult<()> {
    out.write_i32(checked_i32(line.num_coords())?);
    for coord in line.coords() {
        out.write_f64(coord.x());
        out.write_f64(coord.y());
    }
    Ok(())
}

/// Write the body of a line string record.
pub fn write_line_string(
    out: &mut SliceWriter,
    geom: &impl LineStringTrait<T = f64>,
) -> GeoSliceResult<()> {
    write_coordinate_sequence(out, geom)
}
