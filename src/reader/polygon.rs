use geo_types::{LineString, Polygon};

use crate::cursor::SliceReader;
use crate::envelope::Envelope;
use crate::error::GeoSliceResult;
use crate::reader::coord::{read_coordinate_sequence, read_count_bounded};

/// Read a polygon body: the exterior ring, then the interior rings.
pub fn read_polygon(input: &mut SliceReader) -> GeoSliceResult<Polygon> {
    let exterior = LineString::new(read_coordinate_sequence(input)?);
    // each interior ring carries at least its own 4-byte count
    let num_interiors = read_count_bounded(input, 4)?;
    let mut interiors = Vec::with_capacity(num_interiors);
    for _ in 0..num_interiors {
        interiors.push(LineString::new(read_coordinate_sequence(input)?));
    }
    Ok(Polygon::new(exterior, interiors))
}

/// The closed rectangle polygon covering an envelope. An empty envelope
/// gives the empty polygon.
pub(crate) fn polygon_from_envelope(envelope: &Envelope) -> Polygon {
    if envelope.is_empty() {
        return Polygon::new(LineString::new(vec![]), vec![]);
    }
    let (minx, miny) = (envelope.minx(), envelope.miny());
    let (maxx, maxy) = (envelope.maxx(), envelope.maxy());
    let shell = LineString::from(vec![
        (minx, miny),
        (maxx, miny),
        (maxx, maxy),
        (minx, maxy),
        (minx, miny),
    ]);
    Polygon::new(shell, vec![])
}
