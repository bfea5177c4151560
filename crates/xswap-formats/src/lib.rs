#![deny(missing_docs)]

//! Edge list conversions surrounding the XSwap engine: adjacency matrices,
//! delimited text files and string label mapping.

pub mod matrix;
pub mod preprocessing;

pub use matrix::{edges_to_matrix, matrix_to_edges, SparseMatrix};
pub use preprocessing::{
    load_processed_edges, load_str_edges, map_str_edges, write_edges, write_mapping, MappedEdges,
};
