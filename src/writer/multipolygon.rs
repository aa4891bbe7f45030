use crate::buffer::EncodeBuffer;
use crate::error::EncodeError;
use crate::geometry::CoordSeq;
use crate::types::{Dimension, GeometryTypeId};
use crate::writer::{count_u32, polygon_encoded_size, write_polygon};

/// The payload byte length of an encoded multipolygon.
pub fn multi_polygon_encoded_size(polygons: &[Vec<CoordSeq>]) -> usize {
    8 + polygons
        .iter()
        .map(|rings| polygon_encoded_size(rings))
        .sum::<usize>()
}

/// Write a multipolygon payload: an element count padded to eight bytes
/// followed by each member's polygon payload. Which rings belong to which
/// member is explicit in the per-member ring counts, never reconstructed
/// from coordinate geometry.
pub fn write_multi_polygon(
    buf: &mut EncodeBuffer,
    polygons: &[Vec<CoordSeq>],
    dim: Dimension,
) -> Result<(), EncodeError> {
    if polygons.is_empty() {
        return Err(EncodeError::EmptyContainer(GeometryTypeId::MultiPolygon));
    }
    buf.write_u32(count_u32(polygons.len())?)?;
    buf.align8()?;

    for (index, rings) in polygons.iter().enumerate() {
        write_polygon(buf, rings, dim).map_err(|source| EncodeError::Element {
            index,
            source: Box::new(source),
        })?;
    }
    Ok(())
}
