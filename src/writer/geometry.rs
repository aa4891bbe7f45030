use crate::buffer::EncodeBuffer;
use crate::error::EncodeError;
use crate::geometry::Geometry;
use crate::header::{GeometryHeader, HEADER_SIZE};
use crate::writer::{
    geometry_collection_encoded_size, line_string_encoded_size, multi_line_string_encoded_size,
    multi_point_encoded_size, multi_polygon_encoded_size, point_encoded_size,
    polygon_encoded_size, write_geometry_collection, write_line_string, write_multi_line_string,
    write_multi_point, write_multi_polygon, write_point, write_polygon,
};

/// The total encoded byte length of a geometry, header included.
///
/// Always a multiple of eight: the header is eight bytes, counts are padded
/// to eight, and every coordinate width is a multiple of eight.
pub fn geometry_encoded_size(geom: &Geometry) -> usize {
    let payload = match geom {
        Geometry::Point(g) => point_encoded_size(g.dimension()),
        Geometry::LineString(g) => line_string_encoded_size(g.coords()),
        Geometry::Polygon(g) => polygon_encoded_size(g.rings()),
        Geometry::MultiPoint(g) => multi_point_encoded_size(g.coords()),
        Geometry::MultiLineString(g) => multi_line_string_encoded_size(g.lines()),
        Geometry::MultiPolygon(g) => multi_polygon_encoded_size(g.polygons()),
        Geometry::GeometryCollection(g) => geometry_collection_encoded_size(g),
    };
    HEADER_SIZE + payload
}

/// Write one complete geometry: header first, then the payload for the
/// header's type.
pub fn write_geometry(buf: &mut EncodeBuffer, geom: &Geometry) -> Result<(), EncodeError> {
    let header = GeometryHeader::new(geom.type_id(), geom.dimension(), geom.srid());
    header.write(buf)?;

    match geom {
        Geometry::Point(g) => write_point(buf, g.coord()),
        Geometry::LineString(g) => write_line_string(buf, g.coords()),
        Geometry::Polygon(g) => write_polygon(buf, g.rings(), g.dimension()),
        Geometry::MultiPoint(g) => write_multi_point(buf, g.coords()),
        Geometry::MultiLineString(g) => write_multi_line_string(buf, g.lines(), g.dimension()),
        Geometry::MultiPolygon(g) => write_multi_polygon(buf, g.polygons(), g.dimension()),
        Geometry::GeometryCollection(g) => write_geometry_collection(buf, g),
    }
}
