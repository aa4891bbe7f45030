use crate::buffer::DecodeCursor;
use crate::error::DecodeError;
use crate::geometry::CoordSeq;
use crate::types::Dimension;

/// Read a point payload: one coordinate block of the header-declared width.
pub(crate) fn read_point(
    cursor: &mut DecodeCursor,
    dim: Dimension,
) -> Result<CoordSeq, DecodeError> {
    let values = cursor.read_f64_vec(dim.size())?;
    Ok(CoordSeq::new_unchecked(values, dim))
}
