//! Owned geometry values produced and consumed by the codec.
//!
//! Coordinates are stored interleaved (`x0 y0 [z0] [m0] x1 y1 …`) in a
//! [`CoordSeq`], one allocation per sequence, so that encoding and decoding
//! can move whole coordinate blocks with a single bulk copy.

use crate::error::EncodeError;
use crate::types::{Dimension, GeometryTypeId};

/// SRID 0 carries no information, so it collapses to "unspecified".
fn normalize_srid(srid: Option<i32>) -> Option<i32> {
    srid.filter(|srid| *srid != 0)
}

/// An interleaved sequence of coordinates sharing one [`Dimension`].
#[derive(Clone, Debug, PartialEq)]
pub struct CoordSeq {
    values: Vec<f64>,
    dim: Dimension,
}

impl CoordSeq {
    /// Create a coordinate sequence from interleaved values.
    ///
    /// Fails with [`EncodeError::RaggedCoordinates`] if `values.len()` is not
    /// a multiple of the dimension size.
    pub fn try_new(values: Vec<f64>, dim: Dimension) -> Result<Self, EncodeError> {
        if values.len() % dim.size() != 0 {
            return Err(EncodeError::RaggedCoordinates {
                len: values.len(),
                dimension: dim,
            });
        }
        Ok(Self { values, dim })
    }

    pub(crate) fn new_unchecked(values: Vec<f64>, dim: Dimension) -> Self {
        debug_assert_eq!(values.len() % dim.size(), 0);
        Self { values, dim }
    }

    /// Create an XY sequence from coordinate pairs.
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        let mut values = Vec::with_capacity(coords.len() * 2);
        for &(x, y) in coords {
            values.push(x);
            values.push(y);
        }
        Self {
            values,
            dim: Dimension::XY,
        }
    }

    /// Create an XYZ sequence from coordinate triples.
    pub fn from_xyz(coords: &[(f64, f64, f64)]) -> Self {
        let mut values = Vec::with_capacity(coords.len() * 3);
        for &(x, y, z) in coords {
            values.push(x);
            values.push(y);
            values.push(z);
        }
        Self {
            values,
            dim: Dimension::XYZ,
        }
    }

    /// The dimension shared by all coordinates in this sequence.
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// The number of coordinates.
    pub fn len(&self) -> usize {
        self.values.len() / self.dim.size()
    }

    /// Whether this sequence contains no coordinates.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The interleaved scalar values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The `i`th coordinate as a slice of `dim().size()` values.
    pub fn coord(&self, i: usize) -> &[f64] {
        let size = self.dim.size();
        &self.values[i * size..(i + 1) * size]
    }

    /// The X value of the `i`th coordinate.
    pub fn x(&self, i: usize) -> f64 {
        self.values[i * self.dim.size()]
    }

    /// The Y value of the `i`th coordinate.
    pub fn y(&self, i: usize) -> f64 {
        self.values[i * self.dim.size() + 1]
    }

    /// The Z value of the `i`th coordinate, if this sequence carries one.
    pub fn z(&self, i: usize) -> Option<f64> {
        self.dim
            .has_z()
            .then(|| self.values[i * self.dim.size() + 2])
    }

    /// The M value of the `i`th coordinate, if this sequence carries one.
    pub fn m(&self, i: usize) -> Option<f64> {
        match self.dim {
            Dimension::XYM => Some(self.values[i * 3 + 2]),
            Dimension::XYZM => Some(self.values[i * 4 + 3]),
            _ => None,
        }
    }
}

/// A single coordinate with an optional SRID.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    coord: CoordSeq,
    srid: Option<i32>,
}

impl Point {
    /// Create a point from a one-coordinate sequence.
    pub fn try_new(coord: CoordSeq, srid: Option<i32>) -> Result<Self, EncodeError> {
        if coord.len() != 1 {
            return Err(EncodeError::PointCoordinates(coord.len()));
        }
        Ok(Self {
            coord,
            srid: normalize_srid(srid),
        })
    }

    pub(crate) fn new_unchecked(coord: CoordSeq, srid: Option<i32>) -> Self {
        debug_assert_eq!(coord.len(), 1);
        Self { coord, srid }
    }

    /// Create an XY point with no SRID.
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self {
            coord: CoordSeq::from_xy(&[(x, y)]),
            srid: None,
        }
    }

    /// The point's coordinate.
    pub fn coord(&self) -> &CoordSeq {
        &self.coord
    }

    /// The coordinate dimension.
    pub fn dimension(&self) -> Dimension {
        self.coord.dim()
    }

    /// The SRID, if specified.
    pub fn srid(&self) -> Option<i32> {
        self.srid
    }
}

/// An ordered sequence of coordinates with an optional SRID.
#[derive(Clone, Debug, PartialEq)]
pub struct LineString {
    coords: CoordSeq,
    srid: Option<i32>,
}

impl LineString {
    /// Create a line string from its coordinates.
    ///
    /// An empty sequence is representable transiently but rejected when
    /// encoded.
    pub fn new(coords: CoordSeq, srid: Option<i32>) -> Self {
        Self {
            coords,
            srid: normalize_srid(srid),
        }
    }

    /// The coordinates.
    pub fn coords(&self) -> &CoordSeq {
        &self.coords
    }

    /// The number of coordinates.
    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    /// The coordinate dimension.
    pub fn dimension(&self) -> Dimension {
        self.coords.dim()
    }

    /// The SRID, if specified.
    pub fn srid(&self) -> Option<i32> {
        self.srid
    }
}

/// A polygon as an ordered list of rings.
///
/// Ring 0 is the exterior; all subsequent rings are holes. Ring roles are a
/// property of the ordering alone; winding direction is neither inspected
/// nor required.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    rings: Vec<CoordSeq>,
    dim: Dimension,
    srid: Option<i32>,
}

impl Polygon {
    /// Create a polygon from its rings (exterior first).
    ///
    /// Fails if no rings are supplied or if the rings disagree on dimension.
    pub fn try_new(rings: Vec<CoordSeq>, srid: Option<i32>) -> Result<Self, EncodeError> {
        let dim = match rings.first() {
            Some(ring) => ring.dim(),
            None => return Err(EncodeError::EmptyContainer(GeometryTypeId::Polygon)),
        };
        for (index, ring) in rings.iter().enumerate().skip(1) {
            if ring.dim() != dim {
                return Err(EncodeError::Ring {
                    index,
                    source: Box::new(EncodeError::DimensionMismatch {
                        expected: dim,
                        actual: ring.dim(),
                    }),
                });
            }
        }
        Ok(Self {
            rings,
            dim,
            srid: normalize_srid(srid),
        })
    }

    pub(crate) fn new_unchecked(rings: Vec<CoordSeq>, dim: Dimension, srid: Option<i32>) -> Self {
        Self { rings, dim, srid }
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[CoordSeq] {
        &self.rings
    }

    /// The number of rings, exterior included.
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// The exterior ring.
    pub fn exterior(&self) -> &CoordSeq {
        &self.rings[0]
    }

    /// The hole rings, in order.
    pub fn interiors(&self) -> &[CoordSeq] {
        &self.rings[1..]
    }

    /// The coordinate dimension.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The SRID, if specified.
    pub fn srid(&self) -> Option<i32> {
        self.srid
    }
}

/// A set of points stored as one flattened coordinate sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPoint {
    coords: CoordSeq,
    srid: Option<i32>,
}

impl MultiPoint {
    /// Create a multipoint from one coordinate per member point.
    pub fn new(coords: CoordSeq, srid: Option<i32>) -> Self {
        Self {
            coords,
            srid: normalize_srid(srid),
        }
    }

    /// The member coordinates.
    pub fn coords(&self) -> &CoordSeq {
        &self.coords
    }

    /// The number of member points.
    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    /// The coordinate dimension.
    pub fn dimension(&self) -> Dimension {
        self.coords.dim()
    }

    /// The SRID, if specified.
    pub fn srid(&self) -> Option<i32> {
        self.srid
    }
}

/// A set of line strings sharing one dimension and SRID.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiLineString {
    lines: Vec<CoordSeq>,
    dim: Dimension,
    srid: Option<i32>,
}

impl MultiLineString {
    /// Create a multilinestring from its member coordinate sequences.
    ///
    /// Fails if no members are supplied or if members disagree on dimension.
    pub fn try_new(lines: Vec<CoordSeq>, srid: Option<i32>) -> Result<Self, EncodeError> {
        let dim = match lines.first() {
            Some(line) => line.dim(),
            None => return Err(EncodeError::EmptyContainer(GeometryTypeId::MultiLineString)),
        };
        for (index, line) in lines.iter().enumerate().skip(1) {
            if line.dim() != dim {
                return Err(EncodeError::Element {
                    index,
                    source: Box::new(EncodeError::DimensionMismatch {
                        expected: dim,
                        actual: line.dim(),
                    }),
                });
            }
        }
        Ok(Self {
            lines,
            dim,
            srid: normalize_srid(srid),
        })
    }

    pub(crate) fn new_unchecked(lines: Vec<CoordSeq>, dim: Dimension, srid: Option<i32>) -> Self {
        Self { lines, dim, srid }
    }

    /// The member line strings' coordinates, in order.
    pub fn lines(&self) -> &[CoordSeq] {
        &self.lines
    }

    /// The number of member line strings.
    pub fn num_line_strings(&self) -> usize {
        self.lines.len()
    }

    /// The coordinate dimension.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The SRID, if specified.
    pub fn srid(&self) -> Option<i32> {
        self.srid
    }
}

/// A set of polygons sharing one dimension and SRID.
///
/// Each member polygon is its ordered ring list (exterior first); which rings
/// belong to which polygon is explicit in the structure, never derived from
/// geometric properties.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Vec<CoordSeq>>,
    dim: Dimension,
    srid: Option<i32>,
}

impl MultiPolygon {
    /// Create a multipolygon from each member's ring list.
    ///
    /// Fails if no members are supplied, if a member has no rings, or if any
    /// ring disagrees on dimension.
    pub fn try_new(polygons: Vec<Vec<CoordSeq>>, srid: Option<i32>) -> Result<Self, EncodeError> {
        let first = polygons
            .first()
            .ok_or(EncodeError::EmptyContainer(GeometryTypeId::MultiPolygon))?;
        let dim = match first.first() {
            Some(ring) => ring.dim(),
            None => {
                return Err(EncodeError::Element {
                    index: 0,
                    source: Box::new(EncodeError::EmptyContainer(GeometryTypeId::Polygon)),
                })
            }
        };
        for (index, rings) in polygons.iter().enumerate() {
            if rings.is_empty() {
                return Err(EncodeError::Element {
                    index,
                    source: Box::new(EncodeError::EmptyContainer(GeometryTypeId::Polygon)),
                });
            }
            for (ring_index, ring) in rings.iter().enumerate() {
                if ring.dim() != dim {
                    return Err(EncodeError::Element {
                        index,
                        source: Box::new(EncodeError::Ring {
                            index: ring_index,
                            source: Box::new(EncodeError::DimensionMismatch {
                                expected: dim,
                                actual: ring.dim(),
                            }),
                        }),
                    });
                }
            }
        }
        Ok(Self {
            polygons,
            dim,
            srid: normalize_srid(srid),
        })
    }

    pub(crate) fn new_unchecked(
        polygons: Vec<Vec<CoordSeq>>,
        dim: Dimension,
        srid: Option<i32>,
    ) -> Self {
        Self { polygons, dim, srid }
    }

    /// Each member polygon's ring list, in order.
    pub fn polygons(&self) -> &[Vec<CoordSeq>] {
        &self.polygons
    }

    /// The number of member polygons.
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// The `i`th member polygon's rings, exterior first.
    pub fn polygon(&self, i: usize) -> &[CoordSeq] {
        &self.polygons[i]
    }

    /// The coordinate dimension.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The SRID, if specified.
    pub fn srid(&self) -> Option<i32> {
        self.srid
    }
}

/// An ordered sequence of heterogeneously typed geometries.
///
/// Elements may differ in type but share the collection's dimension; each
/// element carries its own SRID.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryCollection {
    geoms: Vec<Geometry>,
    dim: Dimension,
    srid: Option<i32>,
}

impl GeometryCollection {
    /// Create a collection from its elements.
    ///
    /// Fails if no elements are supplied or if elements disagree on
    /// dimension.
    pub fn try_new(geoms: Vec<Geometry>, srid: Option<i32>) -> Result<Self, EncodeError> {
        let dim = match geoms.first() {
            Some(geom) => geom.dimension(),
            None => {
                return Err(EncodeError::EmptyContainer(
                    GeometryTypeId::GeometryCollection,
                ))
            }
        };
        for (index, geom) in geoms.iter().enumerate().skip(1) {
            if geom.dimension() != dim {
                return Err(EncodeError::Element {
                    index,
                    source: Box::new(EncodeError::DimensionMismatch {
                        expected: dim,
                        actual: geom.dimension(),
                    }),
                });
            }
        }
        Ok(Self {
            geoms,
            dim,
            srid: normalize_srid(srid),
        })
    }

    pub(crate) fn new_unchecked(geoms: Vec<Geometry>, dim: Dimension, srid: Option<i32>) -> Self {
        Self { geoms, dim, srid }
    }

    /// The elements, in order.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geoms
    }

    /// The number of elements.
    pub fn num_geometries(&self) -> usize {
        self.geoms.len()
    }

    /// The coordinate dimension shared by all elements.
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// The SRID, if specified.
    pub fn srid(&self) -> Option<i32> {
        self.srid
    }
}

/// A geometry value of any supported type.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// A single coordinate.
    Point(Point),
    /// An ordered coordinate sequence.
    LineString(LineString),
    /// An ordered ring list, exterior first.
    Polygon(Polygon),
    /// A set of points.
    MultiPoint(MultiPoint),
    /// A set of line strings.
    MultiLineString(MultiLineString),
    /// A set of polygons.
    MultiPolygon(MultiPolygon),
    /// A heterogeneous sequence of geometries.
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The type tag of this geometry.
    pub fn type_id(&self) -> GeometryTypeId {
        match self {
            Geometry::Point(_) => GeometryTypeId::Point,
            Geometry::LineString(_) => GeometryTypeId::LineString,
            Geometry::Polygon(_) => GeometryTypeId::Polygon,
            Geometry::MultiPoint(_) => GeometryTypeId::MultiPoint,
            Geometry::MultiLineString(_) => GeometryTypeId::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryTypeId::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryTypeId::GeometryCollection,
        }
    }

    /// The coordinate dimension.
    pub fn dimension(&self) -> Dimension {
        match self {
            Geometry::Point(g) => g.dimension(),
            Geometry::LineString(g) => g.dimension(),
            Geometry::Polygon(g) => g.dimension(),
            Geometry::MultiPoint(g) => g.dimension(),
            Geometry::MultiLineString(g) => g.dimension(),
            Geometry::MultiPolygon(g) => g.dimension(),
            Geometry::GeometryCollection(g) => g.dimension(),
        }
    }

    /// The SRID, if specified.
    pub fn srid(&self) -> Option<i32> {
        match self {
            Geometry::Point(g) => g.srid(),
            Geometry::LineString(g) => g.srid(),
            Geometry::Polygon(g) => g.srid(),
            Geometry::MultiPoint(g) => g.srid(),
            Geometry::MultiLineString(g) => g.srid(),
            Geometry::MultiPolygon(g) => g.srid(),
            Geometry::GeometryCollection(g) => g.srid(),
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}
