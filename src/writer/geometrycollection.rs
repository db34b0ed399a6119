use geo_traits::GeometryCollectionTrait;

use crate::cursor::SliceWriter;
use crate::error::GeoSliceResult;
use crate::writer::{checked_i32, tag_of, write_geometry_body};

/// Write the body of a collection record: a count, then one entry per child.
///
/// Each entry is an i32 length, the child's tag, and the child's body. The
/// length covers the tag and body so a reader can skip a child without
/// parsing it; it is written as a placeholder and patched once the child has
/// been emitted. Entries never repeat the envelope prefix, the outer record
/// already carries the aggregate envelope.
pub fn write_geometry_collection(
    out: &mut SliceWriter,
    geom: &impl GeometryCollectionTrait<T = f64>,
) -> GeoSliceResult<()> {
    out.write_i32(checked_i32(geom.num_geometries())?);
    for child in geom.geometries() {
        let start = out.len();
        out.write_i32(0); // patched below
        out.write_u8(tag_of(&child)?.code());
        write_geometry_body(out, &child)?;
        out.patch_i32_at(start, checked_i32(out.len() - start - 4)?);
    }
    Ok(())
}
