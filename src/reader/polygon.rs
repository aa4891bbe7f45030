use crate::buffer::DecodeCursor;
use crate::error::DecodeError;
use crate::geometry::CoordSeq;
use crate::types::{Dimension, GeometryTypeId};

/// Read a polygon payload: the padded ring count, the contiguous block of
/// per-ring point counts, then each ring's coordinate array.
///
/// Rings are reconstructed in encoded order and ring 0 becomes the exterior
/// without any orientation inspection.
pub(crate) fn read_polygon(
    cursor: &mut DecodeCursor,
    dim: Dimension,
) -> Result<Vec<CoordSeq>, DecodeError> {
    let num_rings = cursor.read_u32()? as usize;
    if num_rings == 0 {
        return Err(DecodeError::EmptyContainer(GeometryTypeId::Polygon));
    }
    cursor.align8()?;

    // The whole count block must be present before any of it is buffered.
    if cursor.remaining() < num_rings * 4 {
        return Err(DecodeError::BufferUnderflow {
            offset: cursor.position(),
            needed: num_rings * 4,
        });
    }
    let mut counts = Vec::with_capacity(num_rings);
    for _ in 0..num_rings {
        counts.push(cursor.read_u32()? as usize);
    }
    cursor.align8()?;

    let mut rings = Vec::with_capacity(num_rings);
    for (index, count) in counts.into_iter().enumerate() {
        let ring = |source: DecodeError| DecodeError::Ring {
            index,
            source: Box::new(source),
        };
        if count == 0 {
            return Err(ring(DecodeError::EmptyLineString));
        }
        let values = cursor.read_f64_vec(count * dim.size()).map_err(ring)?;
        rings.push(CoordSeq::new_unchecked(values, dim));
    }
    Ok(rings)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::buffer::EncodeBuffer;
    use crate::writer::write_polygon;

    /// Clockwise square, the winding an orientation-based reader would have
    /// taken for a hole.
    fn cw_square() -> CoordSeq {
        CoordSeq::from_xy(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0), (0.0, 0.0)])
    }

    /// Counter-clockwise square, nested inside the other.
    fn ccw_hole() -> CoordSeq {
        CoordSeq::from_xy(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0), (1.0, 1.0)])
    }

    #[test]
    fn ring_roles_ignore_winding() {
        // Exterior wound clockwise, hole counter-clockwise: the decoder must
        // preserve the encoded order, not reinterpret by orientation.
        let rings = vec![cw_square(), ccw_hole()];
        let mut buf = EncodeBuffer::new();
        write_polygon(&mut buf, &rings, Dimension::XY).unwrap();

        let mut cursor = DecodeCursor::new(buf.as_slice(), 0);
        let decoded = read_polygon(&mut cursor, Dimension::XY).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0], cw_square());
        assert_eq!(decoded[0].len(), 5);
        assert_eq!(decoded[1], ccw_hole());
        assert_eq!(decoded[1].len(), 5);
    }

    #[test]
    fn roundtrip_many_rings() {
        let rings = vec![cw_square(), ccw_hole(), ccw_hole()];
        let mut buf = EncodeBuffer::new();
        write_polygon(&mut buf, &rings, Dimension::XY).unwrap();

        let mut cursor = DecodeCursor::new(buf.as_slice(), 0);
        assert_eq!(read_polygon(&mut cursor, Dimension::XY).unwrap(), rings);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn zero_ring_count_is_corrupt() {
        let bytes = [0u8; 8];
        let mut cursor = DecodeCursor::new(&bytes, 0);
        assert_eq!(
            read_polygon(&mut cursor, Dimension::XY).unwrap_err(),
            DecodeError::EmptyContainer(GeometryTypeId::Polygon)
        );
    }

    #[test]
    fn zero_point_ring_reports_its_index() {
        let rings = vec![cw_square(), ccw_hole()];
        let mut buf = EncodeBuffer::new();
        write_polygon(&mut buf, &rings, Dimension::XY).unwrap();

        // Zero out the second ring's point count.
        let mut bytes = buf.into_vec();
        bytes[12..16].copy_from_slice(&0u32.to_ne_bytes());
        let mut cursor = DecodeCursor::new(&bytes, 0);
        assert_eq!(
            read_polygon(&mut cursor, Dimension::XY).unwrap_err(),
            DecodeError::Ring {
                index: 1,
                source: Box::new(DecodeError::EmptyLineString)
            }
        );
    }

    #[test]
    fn truncated_ring_reports_its_index() {
        let rings = vec![cw_square(), ccw_hole()];
        let mut buf = EncodeBuffer::new();
        write_polygon(&mut buf, &rings, Dimension::XY).unwrap();

        let bytes = &buf.as_slice()[..buf.len() - 16];
        let mut cursor = DecodeCursor::new(bytes, 0);
        assert!(matches!(
            read_polygon(&mut cursor, Dimension::XY).unwrap_err(),
            DecodeError::Ring { index: 1, .. }
        ));
    }

    #[test]
    fn oversized_ring_count_fails_before_allocating() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&u32::MAX.to_ne_bytes());
        bytes.extend_from_slice(&[0; 4]);
        let mut cursor = DecodeCursor::new(&bytes, 0);
        assert!(matches!(
            read_polygon(&mut cursor, Dimension::XY).unwrap_err(),
            DecodeError::BufferUnderflow { .. }
        ));
    }
}
