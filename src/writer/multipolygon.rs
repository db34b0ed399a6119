use geo_traits::MultiPolygonTrait;

use crate::cursor::SliceWriter;
use crate::error::GeoSliceResult;
use crate::writer::{checked_i32, write_polygon};

/// Write the body of a multi-polygon record: a count followed by one polygon
/// body per member.
pub fn write_multi_polygon(
    out: &mut SliceWriter,
    geom: &impl MultiPolygonTrait<T = f64>,
) -> GeoSliceResult<()> {
    out.write_i32(checked_i32(geom.num_polygons())?);
    for polygon in geom.polygons() {
        write_polygon(out, &polygon)?;
    }
    Ok(())
}
