//! Encoders for each geometry type, plus exact encoded-size functions used
//! to preallocate buffers and compute collection length prefixes.
//!
//! The `write_*` functions emit payloads only; [`write_geometry`] prepends
//! the header and dispatches on the geometry type.

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use geometry::{geometry_encoded_size, write_geometry};
pub use geometrycollection::{geometry_collection_encoded_size, write_geometry_collection};
pub use linestring::{line_string_encoded_size, write_line_string};
pub use multilinestring::{multi_line_string_encoded_size, write_multi_line_string};
pub use multipoint::{multi_point_encoded_size, write_multi_point};
pub use multipolygon::{multi_polygon_encoded_size, write_multi_polygon};
pub use point::{point_encoded_size, write_point};
pub use polygon::{polygon_encoded_size, write_polygon};

/// Round a byte length up to the next 8-byte boundary.
pub(crate) fn padded(len: usize) -> usize {
    (len + 7) & !7
}

pub(crate) fn count_u32(count: usize) -> Result<u32, crate::error::EncodeError> {
    count
        .try_into()
        .map_err(|_| crate::error::EncodeError::CountOverflow(count))
}
