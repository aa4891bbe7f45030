use crate::buffer::EncodeBuffer;
use crate::error::EncodeError;
use crate::geometry::CoordSeq;
use crate::writer::count_u32;

/// The payload byte length of an encoded line string.
pub fn line_string_encoded_size(coords: &CoordSeq) -> usize {
    8 + coords.len() * coords.dim().coord_width()
}

/// Write a line string payload: a point count padded to eight bytes,
/// followed by the coordinate array as one bulk write.
pub fn write_line_string(buf: &mut EncodeBuffer, coords: &CoordSeq) -> Result<(), EncodeError> {
    if coords.is_empty() {
        return Err(EncodeError::EmptyLineString);
    }
    buf.write_u32(count_u32(coords.len())?)?;
    buf.align8()?;
    buf.write_f64_slice(coords.values())
}
