use crate::buffer::DecodeCursor;
use crate::error::DecodeError;
use crate::geometry::CoordSeq;
use crate::types::{Dimension, GeometryTypeId};

/// Read a multipoint payload: a padded element count followed by the member
/// coordinate blocks, which form one contiguous array read in bulk.
pub(crate) fn read_multi_point(
    cursor: &mut DecodeCursor,
    dim: Dimension,
) -> Result<CoordSeq, DecodeError> {
    let count = cursor.read_u32()? as usize;
    if count == 0 {
        return Err(DecodeError::EmptyContainer(GeometryTypeId::MultiPoint));
    }
    cursor.align8()?;
    let values = cursor.read_f64_vec(count * dim.size())?;
    Ok(CoordSeq::new_unchecked(values, dim))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::buffer::EncodeBuffer;
    use crate::writer::write_multi_point;

    #[test]
    fn roundtrip() {
        let coords = CoordSeq::from_xy(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
        let mut buf = EncodeBuffer::new();
        write_multi_point(&mut buf, &coords).unwrap();

        let mut cursor = DecodeCursor::new(buf.as_slice(), 0);
        assert_eq!(read_multi_point(&mut cursor, Dimension::XY).unwrap(), coords);
    }

    #[test]
    fn zero_count_is_corrupt() {
        let bytes = [0u8; 8];
        let mut cursor = DecodeCursor::new(&bytes, 0);
        assert_eq!(
            read_multi_point(&mut cursor, Dimension::XY).unwrap_err(),
            DecodeError::EmptyContainer(GeometryTypeId::MultiPoint)
        );
    }
}
