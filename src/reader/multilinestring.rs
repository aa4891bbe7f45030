use crate::buffer::DecodeCursor;
use crate::error::DecodeError;
use crate::geometry::CoordSeq;
use crate::reader::read_line_string;
use crate::types::{Dimension, GeometryTypeId};

/// Read a multilinestring payload: a padded element count followed by each
/// member's line string payload. Members inherit the container's dimension.
pub(crate) fn read_multi_line_string(
    cursor: &mut DecodeCursor,
    dim: Dimension,
) -> Result<Vec<CoordSeq>, DecodeError> {
    let count = cursor.read_u32()? as usize;
    if count == 0 {
        return Err(DecodeError::EmptyContainer(GeometryTypeId::MultiLineString));
    }
    cursor.align8()?;

    // A member payload occupies at least eight bytes, which bounds how much
    // preallocation a hostile count can request.
    let mut lines = Vec::with_capacity(count.min(cursor.remaining() / 8));
    for index in 0..count {
        let line = read_line_string(cursor, dim).map_err(|source| DecodeError::Element {
            index,
            source: Box::new(source),
        })?;
        lines.push(line);
    }
    Ok(lines)
}
