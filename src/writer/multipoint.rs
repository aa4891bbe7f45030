use crate::buffer::EncodeBuffer;
use crate::error::EncodeError;
use crate::geometry::CoordSeq;
use crate::types::GeometryTypeId;
use crate::writer::count_u32;

/// The payload byte length of an encoded multipoint.
pub fn multi_point_encoded_size(coords: &CoordSeq) -> usize {
    8 + coords.len() * coords.dim().coord_width()
}

/// Write a multipoint payload: an element count padded to eight bytes
/// followed by the member point payloads, which concatenate into one
/// coordinate array written in bulk.
pub fn write_multi_point(buf: &mut EncodeBuffer, coords: &CoordSeq) -> Result<(), EncodeError> {
    if coords.is_empty() {
        return Err(EncodeError::EmptyContainer(GeometryTypeId::MultiPoint));
    }
    buf.write_u32(count_u32(coords.len())?)?;
    buf.align8()?;
    buf.write_f64_slice(coords.values())
}
