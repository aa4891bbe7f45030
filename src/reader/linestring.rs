use crate::buffer::DecodeCursor;
use crate::error::DecodeError;
use crate::geometry::CoordSeq;
use crate::types::Dimension;

/// Read a line string payload: a padded point count followed by the
/// coordinate array, pulled in as one bulk read.
pub(crate) fn read_line_string(
    cursor: &mut DecodeCursor,
    dim: Dimension,
) -> Result<CoordSeq, DecodeError> {
    let count = cursor.read_u32()? as usize;
    if count == 0 {
        return Err(DecodeError::EmptyLineString);
    }
    cursor.align8()?;
    let values = cursor.read_f64_vec(count * dim.size())?;
    Ok(CoordSeq::new_unchecked(values, dim))
}
