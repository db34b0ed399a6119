//! Serialization of geometries into tag-and-envelope-prefixed records.

mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use geometrycollection::write_geometry_collection;
pub use linestring::{write_coordinate_sequence, write_line_string};
pub use multilinestring::write_multi_line_string;
pub use multipoint::write_multi_point;
pub use multipolygon::write_multi_polygon;
pub use point::write_point;
pub use polygon::write_polygon;

use geo_traits::{Dimensions, GeometryTrait, GeometryType, RectTrait};

use crate::cursor::SliceWriter;
use crate::envelope::Envelope;
use crate::error::{GeoSliceError, GeoSliceResult};
use crate::tag::GeometryTag;

/// Initial reservation for a serialized value. Most values are small.
const INITIAL_RESERVATION: usize = 100;

/// Serialize a geometry into an owned byte buffer.
///
/// The record starts with the geometry's [`GeometryTag`]; every type other
/// than [`GeometryTag::Point`] and [`GeometryTag::Envelope`] then carries the
/// geometry's envelope in the next 32 bytes, computed here in a single pass
/// before the body is written.
///
/// Only XY geometries are accepted.
pub fn serialize(geom: &impl GeometryTrait<T = f64>) -> GeoSliceResult<Vec<u8>> {
    match geom.dim() {
        Dimensions::Xy | Dimensions::Unknown(2) => {}
        dim => {
            return Err(GeoSliceError::InvalidGeometry(format!(
                "only XY geometries are supported, got {dim:?}"
            )))
        }
    }

    let tag = tag_of(geom)?;
    let mut out = SliceWriter::with_capacity(INITIAL_RESERVATION);
    out.write_u8(tag.code());
    if tag.has_envelope() {
        write_envelope_bounds(&mut out, &Envelope::of(geom));
    }
    write_geometry_body(&mut out, geom)?;
    Ok(out.into_vec())
}

/// Serialize a bare envelope as a fixed 33-byte record.
///
/// An empty envelope is not a serializable value and is refused.
pub fn serialize_envelope(envelope: &Envelope) -> GeoSliceResult<Vec<u8>> {
    if envelope.is_empty() {
        return Err(GeoSliceError::InvalidGeometry(
            "cannot serialize an empty envelope".to_string(),
        ));
    }
    let mut out = SliceWriter::with_capacity(33);
    out.write_u8(GeometryTag::Envelope.code());
    write_envelope_bounds(&mut out, envelope);
    Ok(out.into_vec())
}

/// The wire tag for a geometry variant.
///
/// `Rect` maps to [`GeometryTag::Envelope`]; triangles and lines are outside
/// the closed type set and are refused.
pub(crate) fn tag_of(geom: &impl GeometryTrait<T = f64>) -> GeoSliceResult<GeometryTag> {
    match geom.as_type() {
        GeometryType::Point(_) => Ok(GeometryTag::Point),
        GeometryType::MultiPoint(_) => Ok(GeometryTag::MultiPoint),
        GeometryType::LineString(_) => Ok(GeometryTag::LineString),
        GeometryType::MultiLineString(_) => Ok(GeometryTag::MultiLineString),
        GeometryType::Polygon(_) => Ok(GeometryTag::Polygon),
        GeometryType::MultiPolygon(_) => Ok(GeometryTag::MultiPolygon),
        GeometryType::GeometryCollection(_) => Ok(GeometryTag::GeometryCollection),
        GeometryType::Rect(_) => Ok(GeometryTag::Envelope),
        GeometryType::Triangle(_) => Err(GeoSliceError::InvalidGeometry(
            "triangles have no serialized form".to_string(),
        )),
        GeometryType::Line(_) => Err(GeoSliceError::InvalidGeometry(
            "lines have no serialized form".to_string(),
        )),
    }
}

/// Write the body of a geometry: everything after the tag byte and the
/// envelope prefix.
pub(crate) fn write_geometry_body(
    out: &mut SliceWriter,
    geom: &impl GeometryTrait<T = f64>,
) -> GeoSliceResult<()> {
    match geom.as_type() {
        GeometryType::Point(g) => {
            write_point(out, g);
            Ok(())
        }
        GeometryType::MultiPoint(g) => write_multi_point(out, g),
        GeometryType::LineString(g) => write_line_string(out, g),
        GeometryType::MultiLineString(g) => write_multi_line_string(out, g),
        GeometryType::Polygon(g) => write_polygon(out, g),
        GeometryType::MultiPolygon(g) => write_multi_polygon(out, g),
        GeometryType::GeometryCollection(g) => write_geometry_collection(out, g),
        GeometryType::Rect(g) => {
            write_rect(out, g);
            Ok(())
        }
        GeometryType::Triangle(_) | GeometryType::Line(_) => Err(GeoSliceError::Internal(
            "geometry variant changed between classification and body".to_string(),
        )),
    }
}

/// Write a 32-byte bounds block, `NaN * 4` for the empty envelope.
pub(crate) fn write_envelope_bounds(out: &mut SliceWriter, envelope: &Envelope) {
    if envelope.is_empty() {
        out.write_f64(f64::NAN);
        out.write_f64(f64::NAN);
        out.write_f64(f64::NAN);
        out.write_f64(f64::NAN);
    } else {
        out.write_f64(envelope.minx());
        out.write_f64(envelope.miny());
        out.write_f64(envelope.maxx());
        out.write_f64(envelope.maxy());
    }
}

/// The body of an envelope record is its bounds.
fn write_rect(out: &mut SliceWriter, rect: &impl RectTrait<T = f64>) {
    use geo_traits::CoordTrait;

    let min = rect.min();
    let max = rect.max();
    out.write_f64(min.x());
    out.write_f64(min.y());
    out.write_f64(max.x());
    out.write_f64(max.y());
}

/// Element counts are serialized as i32; larger geometries are not
/// representable.
pub(crate) fn checked_i32(value: usize) -> GeoSliceResult<i32> {
    i32::try_from(value).map_err(|_| {
        GeoSliceError::InvalidGeometry("geometry has more than 2^31 - 1 elements".to_string())
    })
}
