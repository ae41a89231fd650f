mod pointset;
mod vertex;

use std::hash::Hash;

use geo::Geometry;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ContiguityError, Result};
use crate::geom::{self, Boundary};
use crate::graph::{self, Adjacency};

/// Which contact makes two geometries neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Boundaries share a segment of positive length.
    #[default]
    Rook,
    /// Boundaries share at least one point.
    Queen,
}

/// How contacts are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Exact boundary intersection of every bounding-box candidate pair.
    #[default]
    PointSet,
    /// Coincidence of recorded vertices (queen) or recorded vertex pairs (rook).
    VertexSet,
}

/// Options for one contiguity build.
///
/// ```
/// use geo::{Coord, Geometry, Rect};
/// use spatial_contiguity::{Contiguity, Criterion};
///
/// let geoms: Vec<Geometry<f64>> = vec![
///     Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }).into(),
///     Rect::new(Coord { x: 1.0, y: 1.0 }, Coord { x: 2.0, y: 2.0 }).into(),
/// ];
/// let queen = Contiguity::queen().build(&geoms).unwrap();
/// assert_eq!(queen.n_edges(), 2);
///
/// let rook = Contiguity { criterion: Criterion::Rook, ..Default::default() }.build(&geoms).unwrap();
/// assert_eq!(rook.islands().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contiguity {
    pub criterion: Criterion,
    pub method: Method,
    /// Weight point-set edges by shared boundary length instead of 1.
    pub by_perimeter: bool,
    /// Reject polygons the geometry library considers invalid (point-set only).
    pub validate: bool,
}

impl Default for Contiguity {
    fn default() -> Self {
        Self {
            criterion: Criterion::default(),
            method: Method::default(),
            by_perimeter: false,
            validate: true,
        }
    }
}

impl Contiguity {
    /// Point-set rook contiguity with binary weights.
    pub fn rook() -> Self { Self { criterion: Criterion::Rook, ..Self::default() } }

    /// Point-set queen contiguity with binary weights.
    pub fn queen() -> Self { Self { criterion: Criterion::Queen, ..Self::default() } }

    pub fn with_method(self, method: Method) -> Self { Self { method, ..self } }

    pub fn with_perimeter(self, by_perimeter: bool) -> Self { Self { by_perimeter, ..self } }

    pub fn with_validation(self, validate: bool) -> Self { Self { validate, ..self } }

    /// Build the edge list, identifying geometries by their position.
    pub fn build(&self, geometries: &[Geometry<f64>]) -> Result<Adjacency<usize>> {
        if self.by_perimeter && self.method == Method::VertexSet {
            return Err(ContiguityError::PerimeterUnsupported);
        }

        let shapes = geom::shapes_from_geometries(geometries)?;
        // Errors are gathered in input order so the lowest failing index is reported.
        let boundaries = shapes.par_iter().enumerate()
            .map(|(index, shape)| Boundary::extract(index, shape))
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<Vec<_>>>()?;

        for (index, (shape, boundary)) in shapes.iter().zip(boundaries.iter()).enumerate() {
            if boundary.is_degenerate() {
                log::warn!("geometry {index} has no boundary of positive length; treating it as an island");
            } else if self.validate && self.method == Method::PointSet && !shape.is_valid() {
                return Err(ContiguityError::GeometryLibraryFailure {
                    index,
                    reason: "geometry library reports an invalid polygon".to_string(),
                });
            }
        }

        let pairs = match self.method {
            Method::PointSet => pointset::point_set(&boundaries, self.criterion, self.by_perimeter),
            Method::VertexSet => vertex::vertex_set(&boundaries, self.criterion),
        };

        Ok(graph::assemble(boundaries.len(), &pairs))
    }

    /// Build the edge list, identifying geometry `k` by `ids[k]`.
    pub fn build_with_ids<I>(&self, geometries: &[Geometry<f64>], ids: &[I]) -> Result<Adjacency<I>>
    where
        I: Clone + Eq + Hash,
    {
        graph::check_ids(geometries.len(), ids)?;
        Ok(self.build(geometries)?.with_ids(ids))
    }
}

/// Point-set rook contiguity: neighbors share a boundary segment of positive length.
pub fn rook(geometries: &[Geometry<f64>], by_perimeter: bool) -> Result<Adjacency<usize>> {
    Contiguity::rook().with_perimeter(by_perimeter).build(geometries)
}

/// [`rook`] with caller-supplied ids.
pub fn rook_with_ids<I: Clone + Eq + Hash>(geometries: &[Geometry<f64>], ids: &[I], by_perimeter: bool) -> Result<Adjacency<I>> {
    Contiguity::rook().with_perimeter(by_perimeter).build_with_ids(geometries, ids)
}

/// Point-set queen contiguity: neighbors share at least one boundary point.
pub fn queen(geometries: &[Geometry<f64>], by_perimeter: bool) -> Result<Adjacency<usize>> {
    Contiguity::queen().with_perimeter(by_perimeter).build(geometries)
}

/// [`queen`] with caller-supplied ids.
pub fn queen_with_ids<I: Clone + Eq + Hash>(geometries: &[Geometry<f64>], ids: &[I], by_perimeter: bool) -> Result<Adjacency<I>> {
    Contiguity::queen().with_perimeter(by_perimeter).build_with_ids(geometries, ids)
}

/// Vertex-set contiguity; `rook` selects shared edges, otherwise shared vertices.
pub fn vertex_set_intersection(geometries: &[Geometry<f64>], rook: bool) -> Result<Adjacency<usize>> {
    vertex_set_options(rook).build(geometries)
}

/// [`vertex_set_intersection`] with caller-supplied ids.
pub fn vertex_set_intersection_with_ids<I: Clone + Eq + Hash>(geometries: &[Geometry<f64>], ids: &[I], rook: bool) -> Result<Adjacency<I>> {
    vertex_set_options(rook).build_with_ids(geometries, ids)
}

fn vertex_set_options(rook: bool) -> Contiguity {
    let criterion = if rook { Criterion::Rook } else { Criterion::Queen };
    Contiguity { criterion, method: Method::VertexSet, ..Contiguity::default() }
}
