//! The one-byte type code that starts every serialized geometry.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{GeoSliceError, GeoSliceResult};

/// The type code carried in the first byte of every serialized geometry.
///
/// The numbering is part of the wire format and must never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum GeometryTag {
    /// A single coordinate pair; fixed 17-byte record, no envelope prefix.
    Point = 0,
    /// A set of points.
    MultiPoint = 1,
    /// A polyline.
    LineString = 2,
    /// A set of polylines.
    MultiLineString = 3,
    /// An exterior ring with zero or more interior rings.
    Polygon = 4,
    /// A set of polygons.
    MultiPolygon = 5,
    /// A heterogeneous, possibly nested collection.
    GeometryCollection = 6,
    /// A bare bounding rectangle; fixed 33-byte record.
    Envelope = 7,
}

impl GeometryTag {
    /// Decode a tag from its wire code.
    pub fn from_code(code: u8) -> GeoSliceResult<Self> {
        Self::try_from_primitive(code).map_err(|_| GeoSliceError::UnknownTag(code))
    }

    /// Read the tag of a serialized geometry from its first byte.
    pub fn from_buffer(buf: &[u8]) -> GeoSliceResult<Self> {
        match buf.first() {
            Some(&code) => Self::from_code(code),
            None => Err(GeoSliceError::UnexpectedEof(0)),
        }
    }

    /// The wire code of this tag.
    pub fn code(&self) -> u8 {
        (*self).into()
    }

    /// Whether records of this type carry the 32-byte envelope prefix after
    /// the tag byte.
    pub fn has_envelope(&self) -> bool {
        !matches!(self, GeometryTag::Point | GeometryTag::Envelope)
    }

    /// Whether this type is a collection of simpler geometries.
    pub fn is_multitype(&self) -> bool {
        matches!(
            self,
            GeometryTag::MultiPoint
                | GeometryTag::MultiLineString
                | GeometryTag::MultiPolygon
                | GeometryTag::GeometryCollection
        )
    }

    /// The total record size for the fixed-size types, `None` for the
    /// variable-size ones.
    pub fn serialized_size(&self) -> Option<usize> {
        match self {
            GeometryTag::Point => Some(17),
            GeometryTag::Envelope => Some(33),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(GeometryTag::Point.code(), 0);
        assert_eq!(GeometryTag::MultiPoint.code(), 1);
        assert_eq!(GeometryTag::LineString.code(), 2);
        assert_eq!(GeometryTag::MultiLineString.code(), 3);
        assert_eq!(GeometryTag::Polygon.code(), 4);
        assert_eq!(GeometryTag::MultiPolygon.code(), 5);
        assert_eq!(GeometryTag::GeometryCollection.code(), 6);
        assert_eq!(GeometryTag::Envelope.code(), 7);
    }

    #[test]
    fn round_trip_through_code() {
        for code in 0..8 {
            assert_eq!(GeometryTag::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn unknown_code_is_an_error() {
        assert!(matches!(
            GeometryTag::from_code(8),
            Err(GeoSliceError::UnknownTag(8))
        ));
        assert!(matches!(
            GeometryTag::from_buffer(&[255, 0, 0]),
            Err(GeoSliceError::UnknownTag(255))
        ));
        assert!(GeometryTag::from_buffer(&[]).is_err());
    }

    #[test]
    fn envelope_prefix_shape() {
        assert!(!GeometryTag::Point.has_envelope());
        assert!(!GeometryTag::Envelope.has_envelope());
        assert!(GeometryTag::MultiPoint.has_envelope());
        assert!(GeometryTag::GeometryCollection.has_envelope());
        assert_eq!(GeometryTag::Point.serialized_size(), Some(17));
        assert_eq!(GeometryTag::Envelope.serialized_size(), Some(33));
        assert_eq!(GeometryTag::Polygon.serialized_size(), None);
    }
}
