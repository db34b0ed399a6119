#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod cursor;
pub mod envelope;
pub mod error;
pub mod extent;
pub mod reader;
pub mod tag;
pub mod writer;

pub use envelope::Envelope;
pub use error::{GeoSliceError, GeoSliceResult};
pub use extent::ExtentAccumulator;
pub use reader::{deserialize, deserialize_envelope, empty_point, read_geometry_type};
pub use tag::GeometryTag;
pub use writer::{serialize, serialize_envelope};

#[cfg(test)]
pub(crate) mod test;
