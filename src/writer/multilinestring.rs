use crate::buffer::EncodeBuffer;
use crate::error::EncodeError;
use crate::geometry::CoordSeq;
use crate::types::{Dimension, GeometryTypeId};
use crate::writer::{count_u32, line_string_encoded_size, write_line_string};

/// The payload byte length of an encoded multilinestring.
pub fn multi_line_string_encoded_size(lines: &[CoordSeq]) -> usize {
    8 + lines
        .iter()
        .map(line_string_encoded_size)
        .sum::<usize>()
}

/// Write a multilinestring payload: an element count padded to eight bytes
/// followed by each member's line string payload. No per-member header is
/// written; type and dimension are inherited from the container.
pub fn write_multi_line_string(
    buf: &mut EncodeBuffer,
    lines: &[CoordSeq],
    dim: Dimension,
) -> Result<(), EncodeError> {
    if lines.is_empty() {
        return Err(EncodeError::EmptyContainer(GeometryTypeId::MultiLineString));
    }
    buf.write_u32(count_u32(lines.len())?)?;
    buf.align8()?;

    for (index, line) in lines.iter().enumerate() {
        let element = |source: EncodeError| EncodeError::Element {
            index,
            source: Box::new(source),
        };
        if line.dim() != dim {
            return Err(element(EncodeError::DimensionMismatch {
                expected: dim,
                actual: line.dim(),
            }));
        }
        write_line_string(buf, line).map_err(element)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn payload_layout() {
        let lines = vec![
            CoordSeq::from_xy(&[(0.0, 0.0), (1.0, 1.0)]),
            CoordSeq::from_xy(&[(2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]),
        ];
        let mut buf = EncodeBuffer::new();
        write_multi_line_string(&mut buf, &lines, Dimension::XY).unwrap();

        let bytes = buf.as_slice();
        assert_eq!(bytes.len(), multi_line_string_encoded_size(&lines));
        assert_eq!(bytes[0..4], 2u32.to_ne_bytes());
        // First member payload starts at 8 with its own padded count.
        assert_eq!(bytes[8..12], 2u32.to_ne_bytes());
        assert_eq!(bytes[16..24], 0.0f64.to_ne_bytes());
        // Second member payload follows the first's coordinates.
        assert_eq!(bytes[48..52], 3u32.to_ne_bytes());
    }

    #[test]
    fn rejects_empty_container() {
        let mut buf = EncodeBuffer::new();
        let err = write_multi_line_string(&mut buf, &[], Dimension::XY).unwrap_err();
        assert_eq!(
            err,
            EncodeError::EmptyContainer(GeometryTypeId::MultiLineString)
        );
    }

    #[test]
    fn empty_member_reports_its_index() {
        let lines = vec![
            CoordSeq::from_xy(&[(0.0, 0.0), (1.0, 1.0)]),
            CoordSeq::from_xy(&[]),
        ];
        let mut buf = EncodeBuffer::new();
        let err = write_multi_line_string(&mut buf, &lines, Dimension::XY).unwrap_err();
        assert_eq!(
            err,
            EncodeError::Element {
                index: 1,
                source: Box::new(EncodeError::EmptyLineString)
            }
        );
    }
}
