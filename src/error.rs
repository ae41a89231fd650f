use thiserror::Error;

use crate::geom::Family;

/// Errors returned by the contiguity builders.
///
/// Every error aborts the whole call; no partial edge list is ever returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContiguityError {
    /// The id sequence does not line up with the geometries (wrong length or repeated ids).
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A geometry variant that contiguity is not defined for (points, collections).
    #[error("geometry {index} is a {kind}, which has no boundary to build contiguity from")]
    UnsupportedGeometryType { index: usize, kind: &'static str },

    /// Polygonal and linear geometries were passed in the same call.
    #[error("geometry {index} is {found} but the collection is {expected}")]
    MixedFamilies { index: usize, expected: Family, found: Family },

    /// The geometry library rejected a geometry (invalid polygon, non-finite coordinate).
    #[error("geometry {index} is invalid: {reason}")]
    GeometryLibraryFailure { index: usize, reason: String },

    /// Perimeter weights were requested from the vertex-set algorithm.
    #[error("perimeter weights are only defined for point-set contiguity")]
    PerimeterUnsupported,
}

pub type Result<T> = std::result::Result<T, ContiguityError>;
