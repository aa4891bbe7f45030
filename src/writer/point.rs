use crate::buffer::EncodeBuffer;
use crate::error::EncodeError;
use crate::geometry::CoordSeq;
use crate::types::Dimension;

/// The payload byte length of an encoded point.
pub fn point_encoded_size(dim: Dimension) -> usize {
    dim.coord_width()
}

/// Write a point payload: exactly one coordinate block, no count field.
pub fn write_point(buf: &mut EncodeBuffer, coord: &CoordSeq) -> Result<(), EncodeError> {
    if coord.len() != 1 {
        return Err(EncodeError::PointCoordinates(coord.len()));
    }
    buf.write_f64_slice(coord.values())
}
