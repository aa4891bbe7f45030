//! Defines [`EncodeError`] and [`DecodeError`], the two failure surfaces of
//! this crate.

use thiserror::Error;

use crate::types::{Dimension, GeometryTypeId};

/// Errors raised while encoding a geometry.
///
/// Degenerate geometries (empty line strings, empty containers) are rejected
/// at the codec boundary rather than silently encoded; the geometry library
/// feeding this codec is expected not to produce them.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EncodeError {
    /// A line string (or ring) with zero coordinates.
    #[error("line string contains no coordinates")]
    EmptyLineString,

    /// A container geometry with zero elements (or a polygon with zero rings).
    #[error("{0} contains no elements")]
    EmptyContainer(GeometryTypeId),

    /// A child geometry whose dimension differs from its parent's.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The dimension declared by the parent geometry.
        expected: Dimension,
        /// The dimension actually carried by the child.
        actual: Dimension,
    },

    /// A coordinate buffer whose length is not a multiple of the dimension
    /// size.
    #[error("coordinate buffer of {len} values is not a multiple of dimension {dimension}")]
    RaggedCoordinates {
        /// Number of scalar values supplied.
        len: usize,
        /// Dimension the values were declared with.
        dimension: Dimension,
    },

    /// A point carrying anything other than exactly one coordinate.
    #[error("point must contain exactly one coordinate, got {0}")]
    PointCoordinates(usize),

    /// An unsupported [`geo_traits::Dimensions`] value (only XY, XYZ, XYM and
    /// XYZM are representable).
    #[error("unsupported dimensions {0:?}")]
    UnsupportedDimensions(geo_traits::Dimensions),

    /// A vertex or element count that does not fit in the format's 32-bit
    /// count fields.
    #[error("count {0} does not fit in a u32 count field")]
    CountOverflow(usize),

    /// A write past the declared capacity of a fixed-capacity buffer.
    #[error("write of {needed} bytes exceeds buffer capacity of {capacity}")]
    BufferOverflow {
        /// Total bytes the buffer would have to hold.
        needed: usize,
        /// The caller-declared capacity.
        capacity: usize,
    },

    /// A failure within a specific ring of a polygon.
    #[error("ring {index}: {source}")]
    Ring {
        /// Index of the offending ring (0 is the exterior).
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<EncodeError>,
    },

    /// A failure within a specific element of a container geometry.
    #[error("element {index}: {source}")]
    Element {
        /// Index of the offending element.
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<EncodeError>,
    },
}

/// Errors raised while decoding a geometry.
///
/// A corrupt or truncated buffer always yields an error, never a partially
/// populated geometry; nested failures are wrapped with the ring or element
/// index at which they occurred.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// A type tag outside the range 1–7.
    #[error("unknown geometry type tag {0}")]
    UnknownTypeTag(u8),

    /// Nonzero reserved header bytes or flag bits.
    #[error("reserved header field is not zero")]
    ReservedFieldNonZero,

    /// A read past the end of the buffer.
    #[error("buffer underflow at offset {offset}: {needed} more bytes required")]
    BufferUnderflow {
        /// Offset at which the read was attempted.
        offset: usize,
        /// Bytes the read required.
        needed: usize,
    },

    /// A coordinate array extending past the end of the buffer.
    #[error("coordinate array of {needed} bytes exceeds the {remaining} remaining")]
    TruncatedCoordinates {
        /// Bytes the declared coordinate count implies.
        needed: usize,
        /// Bytes actually remaining in the buffer.
        remaining: usize,
    },

    /// A zero coordinate count, which a conforming encoder never produces.
    #[error("line string contains no coordinates")]
    EmptyLineString,

    /// A zero element count, which a conforming encoder never produces.
    #[error("{0} contains no elements")]
    EmptyContainer(GeometryTypeId),

    /// A collection element whose dimension differs from the collection
    /// header's.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The dimension declared by the collection header.
        expected: Dimension,
        /// The dimension the element's own header declares.
        actual: Dimension,
    },

    /// A collection element whose decoded length differs from its length
    /// prefix.
    #[error("element length prefix declares {declared} bytes but {actual} were decoded")]
    LengthMismatch {
        /// Byte length declared by the prefix.
        declared: usize,
        /// Byte length actually consumed decoding the element.
        actual: usize,
    },

    /// A failure within a specific ring of a polygon.
    #[error("ring {index}: {source}")]
    Ring {
        /// Index of the offending ring (0 is the exterior).
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<DecodeError>,
    },

    /// A failure within a specific element of a container geometry.
    #[error("element {index}: {source}")]
    Element {
        /// Index of the offending element.
        index: usize,
        /// The underlying failure.
        #[source]
        source: Box<DecodeError>,
    },
}
