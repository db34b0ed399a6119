use geo_types::MultiPolygon;

use crate::cursor::SliceReader;
use crate::error::GeoSliceResult;
use crate::reader::coord::read_count_bounded;
use crate::reader::polygon::read_polygon;

/// Read a multi-polygon body.
pub fn read_multi_polygon(input: &mut SliceReader) -> GeoSliceResult<MultiPolygon> {
    // each member polygon carries at least two 4-byte counts
    let count = read_count_bounded(input, 8)?;
    let mut polygons = Vec::with_capacity(count);
    for _ in 0..count {
        polygons.push(read_polygon(input)?);
    }
    Ok(MultiPolygon::new(polygons))
}
