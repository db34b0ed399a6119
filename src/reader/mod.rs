//! Deserialization of records into owned [`geo_types`] geometries.

mod coord;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use geometrycollection::read_geometry_collection;
pub use linestring::read_line_string;
pub use multilinestring::read_multi_line_string;
pub use multipoint::read_multi_point;
pub use multipolygon::read_multi_polygon;
pub use point::{empty_point, read_point};
pub use polygon::read_polygon;

use geo_types::Geometry;

use crate::cursor::SliceReader;
use crate::envelope::Envelope;
use crate::error::GeoSliceResult;
use crate::tag::GeometryTag;

const BOUNDS_WIDTH: u64 = 4 * 8;

/// Deserialize a serialized value into an owned geometry.
///
/// An envelope record comes back as the closed rectangle polygon covering its
/// bounds; an empty envelope comes back as the empty polygon.
pub fn deserialize(buf: &[u8]) -> GeoSliceResult<Geometry<f64>> {
    let mut input = SliceReader::new(buf);
    let tag = GeometryTag::from_code(input.read_u8()?)?;
    if tag.has_envelope() {
        input.skip(BOUNDS_WIDTH)?;
    }
    read_geometry(&mut input, tag)
}

/// Read only the envelope of a serialized value.
///
/// This is O(1) in the size of the value: point records are 17 bytes total,
/// and every other record carries its envelope in the 32 bytes after the tag.
/// The body is never parsed or validated.
pub fn deserialize_envelope(buf: &[u8]) -> GeoSliceResult<Envelope> {
    let mut input = SliceReader::new(buf);
    let tag = GeometryTag::from_code(input.read_u8()?)?;
    match tag {
        GeometryTag::Point => point::read_point_envelope(&mut input),
        _ => read_envelope_bounds(&mut input),
    }
}

/// The geometry type of a serialized value, from its first byte alone.
pub fn read_geometry_type(buf: &[u8]) -> GeoSliceResult<GeometryTag> {
    GeometryTag::from_buffer(buf)
}

/// Read a geometry body: everything after the tag byte and the envelope
/// prefix. Also the entry point for collection entries, which have no
/// envelope prefix to skip.
pub(crate) fn read_geometry(
    input: &mut SliceReader,
    tag: GeometryTag,
) -> GeoSliceResult<Geometry<f64>> {
    match tag {
        GeometryTag::Point => Ok(Geometry::Point(read_point(input)?)),
        GeometryTag::MultiPoint => Ok(Geometry::MultiPoint(read_multi_point(input)?)),
        GeometryTag::LineString => Ok(Geometry::LineString(read_line_string(input)?)),
        GeometryTag::MultiLineString => {
            Ok(Geometry::MultiLineString(read_multi_line_string(input)?))
        }
        GeometryTag::Polygon => Ok(Geometry::Polygon(read_polygon(input)?)),
        GeometryTag::MultiPolygon => Ok(Geometry::MultiPolygon(read_multi_polygon(input)?)),
        GeometryTag::GeometryCollection => Ok(Geometry::GeometryCollection(
            read_geometry_collection(input)?,
        )),
        GeometryTag::Envelope => Ok(Geometry::Polygon(polygon::polygon_from_envelope(
            &read_envelope_bounds(input)?,
        ))),
    }
}

/// Read a 32-byte bounds block; any NaN component reads as the empty
/// envelope.
pub(crate) fn read_envelope_bounds(input: &mut SliceReader) -> GeoSliceResult<Envelope> {
    let minx = input.read_f64()?;
    let miny = input.read_f64()?;
    let maxx = input.read_f64()?;
    let maxy = input.read_f64()?;
    Ok(Envelope::new(minx, miny, maxx, maxy))
}
