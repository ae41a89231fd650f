#![doc = "Rook, queen and vertex-set contiguity between planar geometries"]
mod contiguity;
mod error;
mod geom;
mod graph;

#[doc(inline)]
pub use contiguity::{
    Contiguity, Criterion, Method,
    queen, queen_with_ids, rook, rook_with_ids,
    vertex_set_intersection, vertex_set_intersection_with_ids,
};

#[doc(inline)]
pub use error::{ContiguityError, Result};

#[doc(inline)]
pub use geom::{Family, QUANT_SCALE};

#[doc(inline)]
pub use graph::{Adjacency, AdjacencyMatrix};
