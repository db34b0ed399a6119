//! Extent aggregation over serialized geometries.

use crate::envelope::{Bounds, Envelope};
use crate::error::GeoSliceResult;
use crate::reader::deserialize_envelope;
use crate::writer::serialize_envelope;

/// Accumulator state for the bounding envelope of many serialized values.
///
/// Inputs are folded in through the envelope fast path, so accumulation cost
/// does not depend on vertex counts. The reduction is commutative and
/// associative: values may arrive in any order and partial states may be
/// merged in any grouping. Values with an empty envelope leave the state
/// unchanged.
#[derive(Debug, Clone, Copy)]
pub struct ExtentAccumulator {
    bounds: Bounds,
}

impl ExtentAccumulator {
    /// A new, empty accumulator.
    pub fn new() -> Self {
        Self {
            bounds: Bounds::new(),
        }
    }

    /// Fold one serialized geometry into the state.
    ///
    /// Only the envelope prefix of `bytes` is read; bodies are never parsed.
    pub fn accumulate(&mut self, bytes: &[u8]) -> GeoSliceResult<()> {
        let envelope = deserialize_envelope(bytes)?;
        self.update(&envelope);
        Ok(())
    }

    /// Fold an already-decoded envelope into the state.
    pub fn update(&mut self, envelope: &Envelope) {
        self.bounds.update(envelope);
    }

    /// Merge another accumulator's state into this one.
    pub fn merge(&mut self, other: &ExtentAccumulator) {
        self.bounds.merge(&other.bounds);
    }

    /// Whether no non-empty envelope has been folded in yet.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// The aggregate envelope, or `None` when every input was empty.
    pub fn finish(&self) -> Option<Envelope> {
        let envelope = self.bounds.finish();
        if envelope.is_empty() {
            None
        } else {
            Some(envelope)
        }
    }

    /// The aggregate envelope as a serialized 33-byte record, or `None` (the
    /// SQL NULL of an aggregation over empty inputs).
    pub fn finish_serialized(&self) -> GeoSliceResult<Option<Vec<u8>>> {
        match self.finish() {
            Some(envelope) => Ok(Some(serialize_envelope(&envelope)?)),
            None => Ok(None),
        }
    }
}

impl Default for ExtentAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
