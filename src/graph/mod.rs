mod edges;
mod matrix;

pub use edges::Adjacency;
pub use matrix::AdjacencyMatrix;
pub(crate) use edges::{assemble, check_ids};
