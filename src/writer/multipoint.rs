use geo_traits::MultiPointTrait;

use crate::cursor::SliceWriter;
use crate::error::GeoSliceResult;
use crate::writer::{checked_i32, write_point};

/// Write the body of a multi-point record: a coordinate sequence, with empty
/// member points written as `(NaN, NaN)` pairs.
pub fn write_multi_point(
    out: &mut SliceWriter,
    geom: &impl MultiPointTrait<T = f64>,
) -> GeoSliceResult<()> {
    out.write_i32(checked_i32(geom.num_points())?);
    for point in geom.points() {
        write_point(out, &point);
    }
    Ok(())
}
