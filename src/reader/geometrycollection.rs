use geo_types::GeometryCollection;

use crate::cursor::SliceReader;
use crate::error::{GeoSliceError, GeoSliceResult};
use crate::reader::coord::read_count_bounded;
use crate::reader::read_geometry;
use crate::tag::GeometryTag;

/// Read a collection body.
///
/// Each entry is an i32 length, the child's tag, and the child's body with
/// the envelope prefix omitted. The length is validated against the
/// remaining input before the child is read, and the child must consume its
/// entry exactly.
pub fn read_geometry_collection(input: &mut SliceReader) -> GeoSliceResult<GeometryCollection<f64>> {
    // each entry carries at least its 4-byte length and a tag byte
    let count = read_count_bounded(input, 5)?;
    let mut geometries = Vec::with_capacity(count);
    for _ in 0..count {
        let offset = input.position();
        let length = input.read_i32()?;
        if length < 1 {
            return Err(GeoSliceError::UnexpectedEof(offset));
        }
        let entry = input.sub_slice(input.position(), length as u64)?;

        let mut entry_input = SliceReader::new(entry);
        let tag = GeometryTag::from_code(entry_input.read_u8()?)?;
        let geometry = read_geometry(&mut entry_input, tag)?;
        if entry_input.available() != 0 {
            return Err(GeoSliceError::Internal(format!(
                "collection entry of {length} bytes has {} trailing bytes",
                entry_input.available()
            )));
        }

        input.skip(length as u64)?;
        geometries.push(geometry);
    }
    Ok(GeometryCollection::from(geometries))
}

#[cfg(test)]
mod test {
    use geo::Geometry;

    use crate::error::GeoSliceError;
    use crate::reader::deserialize;
    use crate::test::geometrycollection::{gc0, gc_nested};
    use crate::writer::serialize;

    #[test]
    fn heterogeneous_collection_round_trips() {
        let geom = Geometry::GeometryCollection(gc0());
        let buf = serialize(&geom).unwrap();
        assert_eq!(deserialize(&buf).unwrap(), geom);
    }

    #[test]
    fn nested_collection_round_trips() {
        let geom = Geometry::GeometryCollection(gc_nested());
        let buf = serialize(&geom).unwrap();
        assert_eq!(deserialize(&buf).unwrap(), geom);
    }

    #[test]
    fn entry_length_beyond_input_is_rejected() {
        let geom = Geometry::GeometryCollection(gc0());
        let mut buf = serialize(&geom).unwrap();
        // inflate the first entry's length past the end of the buffer
        buf[37..41].copy_from_slice(&i32::MAX.to_le_bytes());
        assert!(matches!(
            deserialize(&buf),
            Err(GeoSliceError::UnexpectedEof(_))
        ));
    }

    #[test]
    fn entry_length_longer_than_child_is_rejected() {
        let geom = Geometry::GeometryCollection(gc0());
        let buf = serialize(&geom).unwrap();
        let first_length = i32::from_le_bytes(buf[37..41].try_into().unwrap());

        // lengthen the first entry by one byte; the shifted stream still has
        // to fail, either on the stale entry boundary or downstream
        let mut corrupt = buf.clone();
        corrupt[37..41].copy_from_slice(&(first_length + 1).to_le_bytes());
        assert!(deserialize(&corrupt).is_err());
    }
}
