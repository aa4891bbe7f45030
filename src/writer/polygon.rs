use crate::buffer::EncodeBuffer;
use crate::error::EncodeError;
use crate::geometry::CoordSeq;
use crate::types::{Dimension, GeometryTypeId};
use crate::writer::{count_u32, padded};

/// The payload byte length of an encoded polygon.
pub fn polygon_encoded_size(rings: &[CoordSeq]) -> usize {
    let mut size = 8 + padded(4 * rings.len());
    for ring in rings {
        size += ring.len() * ring.dim().coord_width();
    }
    size
}

/// Write a polygon payload: a ring count padded to eight bytes, the
/// per-ring point counts packed contiguously (padded to eight bytes as a
/// block), then each ring's coordinate array in order.
///
/// Ring 0 is the exterior and rings 1..n are holes; that role assignment is
/// carried by the ordering alone, so no winding-order computation happens on
/// either side of the codec.
pub fn write_polygon(
    buf: &mut EncodeBuffer,
    rings: &[CoordSeq],
    dim: Dimension,
) -> Result<(), EncodeError> {
    if rings.is_empty() {
        return Err(EncodeError::EmptyContainer(GeometryTypeId::Polygon));
    }

    buf.write_u32(count_u32(rings.len())?)?;
    buf.align8()?;

    for (index, ring) in rings.iter().enumerate() {
        ring_check(ring, dim).map_err(|source| EncodeError::Ring {
            index,
            source: Box::new(source),
        })?;
        buf.write_u32(count_u32(ring.len())?)?;
    }
    buf.align8()?;

    for ring in rings {
        buf.write_f64_slice(ring.values())?;
    }
    Ok(())
}

fn ring_check(ring: &CoordSeq, dim: Dimension) -> Result<(), EncodeError> {
    if ring.is_empty() {
        return Err(EncodeError::EmptyLineString);
    }
    if ring.dim() != dim {
        return Err(EncodeError::DimensionMismatch {
            expected: dim,
            actual: ring.dim(),
        });
    }
    Ok(())
}
