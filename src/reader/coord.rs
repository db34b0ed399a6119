use geo_types::Coord;

use crate::cursor::SliceReader;
use crate::error::{GeoSliceError, GeoSliceResult};

const COORD_WIDTH: u64 = 2 * 8;

/// Read one coordinate pair.
pub(crate) fn read_coordinate(input: &mut SliceReader) -> GeoSliceResult<Coord> {
    Ok(Coord {
        x: input.read_f64()?,
        y: input.read_f64()?,
    })
}

/// Read an element count.
///
/// Counts are stored as i32; a negative count means the input is corrupt and
/// is reported as truncation.
pub(crate) fn read_count(input: &mut SliceReader) -> GeoSliceResult<usize> {
    let offset = input.position();
    let count = input.read_i32()?;
    usize::try_from(count).map_err(|_| GeoSliceError::UnexpectedEof(offset))
}

/// Read an element count whose elements occupy at least `min_element_size`
/// bytes each, rejecting counts the remaining input cannot possibly hold
/// before anything is allocated for them.
pub(crate) fn read_count_bounded(
    input: &mut SliceReader,
    min_element_size: u64,
) -> GeoSliceResult<usize> {
    let count = read_count(input)?;
    if (count as u64) * min_element_size > input.available() {
        return Err(GeoSliceError::UnexpectedEof(input.position()));
    }
    Ok(count)
}

/// Read a coordinate sequence: an i32 count followed by interleaved x/y
/// pairs.
pub(crate) fn read_coordinate_sequence(input: &mut SliceReader) -> GeoSliceResult<Vec<Coord>> {
    let count = read_count_bounded(input, COORD_WIDTH)?;
    let mut coords = Vec::with_capacity(count);
    for _ in 0..count {
        coords.push(read_coordinate(input)?);
    }
    Ok(coords)
}
