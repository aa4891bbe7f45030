//! The fixed-size geometry header.
//!
//! Every encoded geometry starts with eight bytes:
//!
//! | offset | size | field |
//! |--------|------|-------|
//! | 0      | 1    | type tag (1 = Point … 7 = GeometryCollection) |
//! | 1      | 1    | flags: bit 0 = hasZ, bit 1 = hasM, bit 2 = hasSRID |
//! | 2      | 2    | reserved, must be zero |
//! | 4      | 4    | SRID as a signed 32-bit integer, 0 when absent |

use crate::buffer::{DecodeCursor, EncodeBuffer};
use crate::error::{DecodeError, EncodeError};
use crate::types::{Dimension, GeometryTypeId};

/// Encoded size of the geometry header in bytes.
pub const HEADER_SIZE: usize = 8;

const FLAG_HAS_Z: u8 = 0b0000_0001;
const FLAG_HAS_M: u8 = 0b0000_0010;
const FLAG_HAS_SRID: u8 = 0b0000_0100;
const FLAG_RESERVED: u8 = !(FLAG_HAS_Z | FLAG_HAS_M | FLAG_HAS_SRID);

/// A decoded geometry header.
///
/// Parsing the header alone classifies a geometry (type, dimension, SRID)
/// without touching its payload, which is all that type-dispatching callers
/// need.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryHeader {
    type_id: GeometryTypeId,
    dim: Dimension,
    srid: Option<i32>,
}

impl GeometryHeader {
    pub(crate) fn new(type_id: GeometryTypeId, dim: Dimension, srid: Option<i32>) -> Self {
        Self { type_id, dim, srid }
    }

    /// Read the header of the geometry encoded at `offset`.
    pub fn try_read(buf: &[u8], offset: usize) -> Result<Self, DecodeError> {
        let mut cursor = DecodeCursor::new(buf, offset);
        Self::read(&mut cursor)
    }

    /// The geometry type tag.
    pub fn type_id(&self) -> GeometryTypeId {
        self.type_id
    }

    /// The coordinate dimension, derived from the flag bits.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The SRID if the header declares one.
    pub fn srid(&self) -> Option<i32> {
        self.srid
    }

    pub(crate) fn read(cursor: &mut DecodeCursor) -> Result<Self, DecodeError> {
        let tag = cursor.read_u8()?;
        let type_id =
            GeometryTypeId::try_from(tag).map_err(|_| DecodeError::UnknownTypeTag(tag))?;

        let flags = cursor.read_u8()?;
        if flags & FLAG_RESERVED != 0 {
            return Err(DecodeError::ReservedFieldNonZero);
        }

        let reserved = cursor.read_u16()?;
        if reserved != 0 {
            return Err(DecodeError::ReservedFieldNonZero);
        }

        let dim = Dimension::from_flags(flags & FLAG_HAS_Z != 0, flags & FLAG_HAS_M != 0);

        let srid_value = cursor.read_i32()?;
        let srid = (flags & FLAG_HAS_SRID != 0).then_some(srid_value);

        Ok(Self { type_id, dim, srid })
    }

    pub(crate) fn write(&self, buf: &mut EncodeBuffer) -> Result<(), EncodeError> {
        buf.write_u8(self.type_id.into())?;

        let mut flags = 0u8;
        if self.dim.has_z() {
            flags |= FLAG_HAS_Z;
        }
        if self.dim.has_m() {
            flags |= FLAG_HAS_M;
        }
        if self.srid.is_some() {
            flags |= FLAG_HAS_SRID;
        }
        buf.write_u8(flags)?;

        buf.write_u16(0)?;
        buf.write_i32(self.srid.unwrap_or(0))?;
        Ok(())
    }
}
