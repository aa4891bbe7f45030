use crate::buffer::DecodeCursor;
use crate::error::DecodeError;
use crate::geometry::CoordSeq;
use crate::reader::read_polygon;
use crate::types::{Dimension, GeometryTypeId};

/// Read a multipolygon payload: a padded element count followed by each
/// member's polygon payload. The per-member ring counts carry the polygon
/// structure explicitly.
pub(crate) fn read_multi_polygon(
    cursor: &mut DecodeCursor,
    dim: Dimension,
) -> Result<Vec<Vec<CoordSeq>>, DecodeError> {
    let count = cursor.read_u32()? as usize;
    if count == 0 {
        return Err(DecodeError::EmptyContainer(GeometryTypeId::MultiPolygon));
    }
    cursor.align8()?;

    let mut polygons = Vec::with_capacity(count.min(cursor.remaining() / 8));
    for index in 0..count {
        let rings = read_polygon(cursor, dim).map_err(|source| DecodeError::Element {
            index,
            source: Box::new(source),
        })?;
        polygons.push(rings);
    }
    Ok(polygons)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::buffer::EncodeBuffer;
    use crate::writer::write_multi_polygon;

    fn with_hole() -> Vec<CoordSeq> {
        vec![
            CoordSeq::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]),
            CoordSeq::from_xy(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)]),
        ]
    }

    fn triangle() -> Vec<CoordSeq> {
        vec![CoordSeq::from_xy(&[
            (10.0, 10.0),
            (11.0, 10.0),
            (10.0, 11.0),
            (10.0, 10.0),
        ])]
    }

    #[test]
    fn roundtrip_preserves_member_ring_structure() {
        let polygons = vec![with_hole(), triangle()];
        let mut buf = EncodeBuffer::new();
        write_multi_polygon(&mut buf, &polygons, Dimension::XY).unwrap();

        let mut cursor = DecodeCursor::new(buf.as_slice(), 0);
        let decoded = read_multi_polygon(&mut cursor, Dimension::XY).unwrap();
        assert_eq!(decoded.len(), 2);
        // The hole stays attached to the first member; nothing is inferred
        // from coordinates.
        assert_eq!(decoded[0].len(), 2);
        assert_eq!(decoded[1].len(), 1);
        assert_eq!(decoded, polygons);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn corrupt_member_reports_its_index() {
        let polygons = vec![with_hole(), triangle()];
        let mut buf = EncodeBuffer::new();
        write_multi_polygon(&mut buf, &polygons, Dimension::XY).unwrap();

        let bytes = &buf.as_slice()[..buf.len() - 24];
        let mut cursor = DecodeCursor::new(bytes, 0);
        assert!(matches!(
            read_multi_polygon(&mut cursor, Dimension::XY).unwrap_err(),
            DecodeError::Element { index: 1, .. }
        ));
    }
}
