use crate::buffer::DecodeCursor;
use crate::error::DecodeError;
use crate::geometry::Geometry;
use crate::reader::read_geometry;
use crate::types::{Dimension, GeometryTypeId};

/// Read a geometry collection payload: a padded element count, then for each
/// element a padded byte-length prefix followed by the element's complete
/// self-describing encoding.
///
/// Each element's consumed length is checked against its prefix, and its
/// header dimension against the collection's, so a decoded collection always
/// satisfies the one-dimension-per-geometry invariant.
pub(crate) fn read_geometry_collection(
    cursor: &mut DecodeCursor,
    dim: Dimension,
) -> Result<Vec<Geometry>, DecodeError> {
    let count = cursor.read_u32()? as usize;
    if count == 0 {
        return Err(DecodeError::EmptyContainer(
            GeometryTypeId::GeometryCollection,
        ));
    }
    cursor.align8()?;

    // An element occupies at least eight bytes of prefix plus its encoding.
    let mut geoms = Vec::with_capacity(count.min(cursor.remaining() / 16));
    for index in 0..count {
        let element = |source: DecodeError| DecodeError::Element {
            index,
            source: Box::new(source),
        };

        let declared = cursor.read_u32()? as usize;
        cursor.align8()?;

        let start = cursor.position();
        let geom = read_geometry(cursor).map_err(element)?;
        let actual = cursor.position() - start;
        if actual != declared {
            return Err(element(DecodeError::LengthMismatch { declared, actual }));
        }
        if geom.dimension() != dim {
            return Err(element(DecodeError::DimensionMismatch {
                expected: dim,
                actual: geom.dimension(),
            }));
        }
        geoms.push(geom);
    }
    Ok(geoms)
}
