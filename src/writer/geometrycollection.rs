use crate::buffer::EncodeBuffer;
use crate::error::EncodeError;
use crate::geometry::GeometryCollection;
use crate::types::GeometryTypeId;
use crate::writer::{count_u32, geometry_encoded_size, write_geometry};

/// The payload byte length of an encoded geometry collection.
pub fn geometry_collection_encoded_size(gc: &GeometryCollection) -> usize {
    8 + gc
        .geometries()
        .iter()
        .map(|geom| 8 + geometry_encoded_size(geom))
        .sum::<usize>()
}

/// Write a geometry collection payload: an element count padded to eight
/// bytes, then for each element a byte-length prefix (padded to eight bytes)
/// followed by the element's complete self-describing encoding.
///
/// The length prefix lets a reader step over an element without decoding it.
/// Elements carry their own headers because the collection is the one
/// container whose members may differ in type.
pub fn write_geometry_collection(
    buf: &mut EncodeBuffer,
    gc: &GeometryCollection,
) -> Result<(), EncodeError> {
    let geoms = gc.geometries();
    if geoms.is_empty() {
        return Err(EncodeError::EmptyContainer(
            GeometryTypeId::GeometryCollection,
        ));
    }
    buf.write_u32(count_u32(geoms.len())?)?;
    buf.align8()?;

    for (index, geom) in geoms.iter().enumerate() {
        let element = |source: EncodeError| EncodeError::Element {
            index,
            source: Box::new(source),
        };
        if geom.dimension() != gc.dimension() {
            return Err(element(EncodeError::DimensionMismatch {
                expected: gc.dimension(),
                actual: geom.dimension(),
            }));
        }

        let encoded_len = geometry_encoded_size(geom);
        buf.write_u32(count_u32(encoded_len).map_err(element)?)?;
        buf.align8()?;

        let start = buf.len();
        write_geometry(buf, geom).map_err(element)?;
        debug_assert_eq!(buf.len() - start, encoded_len);
    }
    Ok(())
}
