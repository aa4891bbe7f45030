//! A compact, native-endian, alignment-aware binary codec for 2D/3D/4D
//! vector geometries.
//!
//! This format is a transient representation for spatial query execution: a
//! geometry is encoded on one machine (or thread) and decoded on another of
//! the same architecture within the same process or cluster, then discarded.
//! That narrow contract is what the layout exploits:
//!
//! - **Native byte order.** Multi-byte values are written in the host's
//!   endianness and carry no byte-order marker. Producer and consumer must
//!   run on machines of identical endianness; this is a documented
//!   precondition of the format, not a runtime check.
//! - **Eight-byte alignment.** Every multi-byte field and every coordinate
//!   block starts at an offset that is a multiple of eight bytes relative to
//!   the start of the encoding, with zero padding inserted after narrower
//!   fields. Coordinate arrays therefore move with single bulk copies
//!   instead of per-scalar conversions.
//! - **Explicit structure.** A polygon's rings are stored exterior-first in
//!   ring order, and a multipolygon records which rings belong to which
//!   member. Nothing is ever inferred from winding direction or other
//!   geometric properties.
//!
//! # Encoding layout
//!
//! Every geometry starts with an 8-byte header (see [`GeometryHeader`]):
//! a type tag (1–7), a flags byte (hasZ / hasM / hasSRID), two reserved zero
//! bytes, and a 32-bit SRID. The payload follows:
//!
//! | type | payload |
//! |------|---------|
//! | Point | one coordinate block (16/24/32 bytes for XY/XYZ-XYM/XYZM) |
//! | LineString | point count (padded to 8), coordinate array |
//! | Polygon | ring count (padded to 8), per-ring point counts (one block, padded to 8), ring coordinate arrays |
//! | MultiPoint / MultiLineString / MultiPolygon | element count (padded to 8), member payloads without per-member headers |
//! | GeometryCollection | element count (padded to 8), then per element a byte-length prefix (padded to 8) and the element's complete encoding |
//!
//! Multi-container members are homogeneous, so they inherit type, dimension
//! and SRID from the container's header. GeometryCollection members are
//! heterogeneous, so each carries its own header; the length prefix lets a
//! reader step over an element without decoding it.
//!
//! # Example
//!
//! ```
//! use geonative::{decode, encode, EncodeBuffer, Geometry, Point};
//!
//! let geom = Geometry::Point(Point::from_xy(1.5, 2.5));
//!
//! let mut buf = EncodeBuffer::new();
//! let written = encode(&geom, &mut buf)?;
//! assert_eq!(written, 24);
//!
//! let decoded = decode(buf.as_slice(), 0)?;
//! assert_eq!(decoded, geom);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Concurrency
//!
//! Encoding and decoding are synchronous, allocation-light, and share no
//! state; calls on independent buffers are freely parallel. A single buffer
//! must not be written while another thread reads it.

#![warn(missing_docs)]

mod buffer;
mod error;
mod geometry;
mod header;
mod reader;
mod types;
pub mod writer;

pub use buffer::EncodeBuffer;
pub use error::{DecodeError, EncodeError};
pub use geometry::{
    CoordSeq, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
pub use header::{GeometryHeader, HEADER_SIZE};
pub use types::{Dimension, GeometryTypeId};

use buffer::DecodeCursor;

/// Encode one complete geometry at the buffer's current position.
///
/// Writes the self-describing encoding (header plus payload, recursively for
/// collection elements) and returns the number of bytes written, which
/// always equals [`encoded_size`]. On failure the buffer is restored to its
/// pre-call length.
pub fn encode(geom: &Geometry, buf: &mut EncodeBuffer) -> Result<usize, EncodeError> {
    buf.set_base();
    let start = buf.len();
    match writer::write_geometry(buf, geom) {
        Ok(()) => Ok(buf.len() - start),
        Err(err) => {
            buf.truncate(start);
            Err(err)
        }
    }
}

/// Encode one complete geometry into a freshly allocated, exactly sized
/// vector.
pub fn encode_to_vec(geom: &Geometry) -> Result<Vec<u8>, EncodeError> {
    let mut buf = EncodeBuffer::with_limit(encoded_size(geom));
    encode(geom, &mut buf)?;
    Ok(buf.into_vec())
}

/// Decode one complete geometry starting at `offset`.
///
/// Reads exactly one encoding and ignores anything after it, so callers may
/// pack several encodings back-to-back in one buffer and decode each by
/// offset.
pub fn decode(buf: &[u8], offset: usize) -> Result<Geometry, DecodeError> {
    let mut cursor = DecodeCursor::new(buf, offset);
    reader::read_geometry(&mut cursor)
}

/// The total encoded byte length of a geometry, header included.
pub fn encoded_size(geom: &Geometry) -> usize {
    writer::geometry_encoded_size(geom)
}

#[cfg(test)]
mod test {
    use super::*;

    fn square() -> CoordSeq {
        CoordSeq::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)])
    }

    fn hole() -> CoordSeq {
        CoordSeq::from_xy(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)])
    }

    fn menagerie() -> Vec<Geometry> {
        vec![
            Geometry::Point(Point::from_xy(1.5, 2.5)),
            Geometry::Point(
                Point::try_new(
                    CoordSeq::try_new(vec![1.0, 2.0, 3.0, 4.0], Dimension::XYZM).unwrap(),
                    Some(4326),
                )
                .unwrap(),
            ),
            Geometry::LineString(LineString::new(
                CoordSeq::from_xyz(&[(0.0, 0.0, 10.0), (1.0, 1.0, 11.0), (2.0, 2.0, 12.0)]),
                None,
            )),
            Geometry::Polygon(Polygon::try_new(vec![square(), hole()], Some(3857)).unwrap()),
            Geometry::MultiPoint(MultiPoint::new(
                CoordSeq::try_new(vec![0.0, 0.0, 5.0, 1.0, 1.0, 6.0], Dimension::XYM).unwrap(),
                None,
            )),
            Geometry::MultiLineString(
                MultiLineString::try_new(
                    vec![
                        CoordSeq::from_xy(&[(0.0, 0.0), (1.0, 1.0)]),
                        CoordSeq::from_xy(&[(2.0, 2.0), (3.0, 3.0), (4.0, 4.0)]),
                    ],
                    None,
                )
                .unwrap(),
            ),
            Geometry::MultiPolygon(
                MultiPolygon::try_new(vec![vec![square(), hole()], vec![square()]], Some(4326))
                    .unwrap(),
            ),
            Geometry::GeometryCollection(
                GeometryCollection::try_new(
                    vec![
                        Geometry::Point(Point::from_xy(1.0, 2.0)),
                        Geometry::LineString(LineString::new(
                            CoordSeq::from_xy(&[(0.0, 0.0), (1.0, 1.0)]),
                            Some(4326),
                        )),
                        Geometry::Polygon(Polygon::try_new(vec![square()], None).unwrap()),
                    ],
                    None,
                )
                .unwrap(),
            ),
        ]
    }

    #[test]
    fn roundtrip_menagerie() {
        for geom in menagerie() {
            let bytes = encode_to_vec(&geom).unwrap();
            assert_eq!(bytes.len(), encoded_size(&geom));
            assert_eq!(bytes.len() % 8, 0);

            let decoded = decode(&bytes, 0).unwrap();
            assert_eq!(decoded, geom, "{:?}", geom.type_id());
        }
    }

    #[test]
    fn point_reference_encoding() {
        // A Point at (1.5, 2.5), XY, no SRID: the 8-byte header followed by
        // the two native-order doubles.
        let geom = Geometry::Point(Point::from_xy(1.5, 2.5));
        let bytes = encode_to_vec(&geom).unwrap();

        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[..8], &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(bytes[8..16], 1.5f64.to_ne_bytes());
        assert_eq!(bytes[16..24], 2.5f64.to_ne_bytes());

        let decoded = decode(&bytes, 0).unwrap();
        assert_eq!(decoded.srid(), None);
        assert_eq!(decoded, geom);
    }

    #[test]
    fn polygon_ring_report() {
        // Two closed 5-coordinate rings; ring roles come from order alone.
        let geom = Geometry::Polygon(Polygon::try_new(vec![square(), hole()], None).unwrap());
        let bytes = encode_to_vec(&geom).unwrap();

        match decode(&bytes, 0).unwrap() {
            Geometry::Polygon(polygon) => {
                assert_eq!(polygon.num_rings(), 2);
                assert_eq!(polygon.exterior().len(), 5);
                assert_eq!(polygon.interiors()[0].len(), 5);
                assert_eq!(polygon.exterior(), &square());
            }
            other => panic!("expected a polygon, got {:?}", other.type_id()),
        }
    }

    #[test]
    fn packed_encodings_decode_by_offset() {
        let first = Geometry::Point(Point::from_xy(1.0, 2.0));
        let second = Geometry::LineString(LineString::new(
            CoordSeq::from_xy(&[(3.0, 4.0), (5.0, 6.0)]),
            None,
        ));

        let mut buf = EncodeBuffer::new();
        let first_len = encode(&first, &mut buf).unwrap();
        let second_len = encode(&second, &mut buf).unwrap();
        assert_eq!(buf.len(), first_len + second_len);

        assert_eq!(decode(buf.as_slice(), 0).unwrap(), first);
        assert_eq!(decode(buf.as_slice(), first_len).unwrap(), second);
    }

    #[test]
    fn fixed_capacity_overflow() {
        let geom = Geometry::Point(Point::from_xy(1.0, 2.0));
        let mut buf = EncodeBuffer::with_limit(16);
        let err = encode(&geom, &mut buf).unwrap_err();
        assert_eq!(
            err,
            EncodeError::BufferOverflow {
                needed: 24,
                capacity: 16
            }
        );
        // A failed encode leaves the buffer as it was.
        assert!(buf.is_empty());
    }

    #[test]
    fn buffer_reuse_across_encodes() {
        let mut buf = EncodeBuffer::new();
        for geom in menagerie() {
            buf.clear();
            encode(&geom, &mut buf).unwrap();
            assert_eq!(decode(buf.as_slice(), 0).unwrap(), geom);
        }
    }

    #[test]
    fn header_inspection_without_decoding() {
        let geom = Geometry::MultiPolygon(
            MultiPolygon::try_new(vec![vec![square()]], Some(4326)).unwrap(),
        );
        let bytes = encode_to_vec(&geom).unwrap();

        let header = GeometryHeader::try_read(&bytes, 0).unwrap();
        assert_eq!(header.type_id(), GeometryTypeId::MultiPolygon);
        assert_eq!(header.dimension(), Dimension::XY);
        assert_eq!(header.srid(), Some(4326));
    }

    #[test]
    fn decode_failure_reports_nested_path() {
        let geom = Geometry::MultiLineString(
            MultiLineString::try_new(
                vec![
                    CoordSeq::from_xy(&[(0.0, 0.0), (1.0, 1.0)]),
                    CoordSeq::from_xy(&[(2.0, 2.0), (3.0, 3.0)]),
                ],
                None,
            )
            .unwrap(),
        );
        let bytes = encode_to_vec(&geom).unwrap();

        let err = decode(&bytes[..bytes.len() - 8], 0).unwrap_err();
        assert!(matches!(err, DecodeError::Element { index: 1, .. }));
        let rendered = err.to_string();
        assert!(rendered.contains("element 1"), "{rendered}");
    }
}
