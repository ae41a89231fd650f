mod bbox;
mod boundary;
mod quant;

use std::fmt;

use geo::{Geometry, LineString, MultiLineString, MultiPolygon, Polygon, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{ContiguityError, Result};

pub(crate) use bbox::SpatialIndex;
pub(crate) use boundary::Boundary;
pub use quant::QUANT_SCALE;
pub(crate) use quant::{QCoord, Segment};

/// The two geometry families contiguity is defined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    Polygonal,
    Linear,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Polygonal => f.write_str("polygonal"),
            Family::Linear => f.write_str("linear"),
        }
    }
}

/// A single input geometry, normalized to one of the four supported variants.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Shape {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
    Line(LineString<f64>),
    MultiLine(MultiLineString<f64>),
}

impl Shape {
    /// Convert the `index`-th input geometry, rejecting points and collections.
    pub(crate) fn from_geometry(index: usize, geometry: &Geometry<f64>) -> Result<Self> {
        let unsupported = |kind| ContiguityError::UnsupportedGeometryType { index, kind };
        Ok(match geometry {
            Geometry::Polygon(polygon) => Shape::Polygon(polygon.clone()),
            Geometry::MultiPolygon(polygons) => Shape::MultiPolygon(polygons.clone()),
            Geometry::Rect(rect) => Shape::Polygon(rect.to_polygon()),
            Geometry::Triangle(triangle) => Shape::Polygon(triangle.to_polygon()),
            Geometry::LineString(line) => Shape::Line(line.clone()),
            Geometry::MultiLineString(lines) => Shape::MultiLine(lines.clone()),
            Geometry::Line(line) => Shape::Line(LineString::from(vec![line.start, line.end])),
            Geometry::Point(_) => return Err(unsupported("Point")),
            Geometry::MultiPoint(_) => return Err(unsupported("MultiPoint")),
            Geometry::GeometryCollection(_) => return Err(unsupported("GeometryCollection")),
        })
    }

    #[inline]
    pub(crate) fn family(&self) -> Family {
        match self {
            Shape::Polygon(_) | Shape::MultiPolygon(_) => Family::Polygonal,
            Shape::Line(_) | Shape::MultiLine(_) => Family::Linear,
        }
    }

    /// Whether the geometry library accepts this shape. Linear shapes are always
    /// accepted; self-crossing lines still have a well-defined boundary chain.
    pub(crate) fn is_valid(&self) -> bool {
        match self {
            Shape::Polygon(polygon) => polygon.is_valid(),
            Shape::MultiPolygon(polygons) => polygons.is_valid(),
            Shape::Line(_) | Shape::MultiLine(_) => true,
        }
    }
}

/// Convert and family-check a whole input collection.
///
/// The family of the first geometry fixes the family of the collection.
pub(crate) fn shapes_from_geometries(geometries: &[Geometry<f64>]) -> Result<Vec<Shape>> {
    let shapes = geometries.iter().enumerate()
        .map(|(index, geometry)| Shape::from_geometry(index, geometry))
        .collect::<Result<Vec<_>>>()?;

    if let Some(expected) = shapes.first().map(Shape::family) {
        if let Some((index, shape)) = shapes.iter().enumerate().find(|(_, s)| s.family() != expected) {
            return Err(ContiguityError::MixedFamilies { index, expected, found: shape.family() });
        }
    }

    Ok(shapes)
}
