use crate::buffer::DecodeCursor;
use crate::error::DecodeError;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::header::GeometryHeader;
use crate::reader::{
    read_geometry_collection, read_line_string, read_multi_line_string, read_multi_point,
    read_multi_polygon, read_point, read_polygon,
};
use crate::types::GeometryTypeId;

/// Read one complete geometry: its header, then the payload the header's
/// type tag selects.
///
/// The cursor stops exactly at the end of the encoding; trailing bytes are
/// never touched.
pub(crate) fn read_geometry(cursor: &mut DecodeCursor) -> Result<Geometry, DecodeError> {
    let header = GeometryHeader::read(cursor)?;
    let dim = header.dimension();
    // A set SRID flag with value zero still means "unspecified".
    let srid = header.srid().filter(|srid| *srid != 0);

    let geom = match header.type_id() {
        GeometryTypeId::Point => {
            Geometry::Point(Point::new_unchecked(read_point(cursor, dim)?, srid))
        }
        GeometryTypeId::LineString => {
            Geometry::LineString(LineString::new(read_line_string(cursor, dim)?, srid))
        }
        GeometryTypeId::Polygon => {
            Geometry::Polygon(Polygon::new_unchecked(read_polygon(cursor, dim)?, dim, srid))
        }
        GeometryTypeId::MultiPoint => {
            Geometry::MultiPoint(MultiPoint::new(read_multi_point(cursor, dim)?, srid))
        }
        GeometryTypeId::MultiLineString => Geometry::MultiLineString(
            MultiLineString::new_unchecked(read_multi_line_string(cursor, dim)?, dim, srid),
        ),
        GeometryTypeId::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::new_unchecked(
            read_multi_polygon(cursor, dim)?,
            dim,
            srid,
        )),
        GeometryTypeId::GeometryCollection => Geometry::GeometryCollection(
            GeometryCollection::new_unchecked(read_geometry_collection(cursor, dim)?, dim, srid),
        ),
    };
    Ok(geom)
}
