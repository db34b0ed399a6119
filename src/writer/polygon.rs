use geo_traits::PolygonTrait;

use crate::cursor::SliceWriter;
use crate::error::GeoSliceResult;
use crate::writer::{checked_i32, write_coordinate_sequence};

/// Write a polygon body: the exterior ring's coordinate sequence, the number
/// of interior rings, then one coordinate sequence per interior ring.
///
/// An empty polygon has a zero-length exterior sequence and no interiors.
pub fn write_polygon(out: &mut SliceWriter, geom: &impl PolygonTrait<T = f64>) -> GeoSliceResult<()> {
    match geom.exterior() {
        Some(ring) => write_coordinate_sequence(out, &ring)?,
        None => out.write_i32(0),
    }
    out.write_i32(checked_i32(geom.num_interiors())?);
    for ring in geom.interiors() {
        write_coordinate_sequence(out, &ring)?;
    }
    Ok(())
}
