//! Sparse (bi)adjacency matrices and conversion to and from edge lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use xswap_core::errors::{ErrorInfo, XswapError};
use xswap_core::Edge;

/// Sparse integer matrix keyed by `(row, column)` in row-major order.
///
/// Used both as a 0/1 (bi)adjacency matrix and as an accumulator of edge
/// occurrences across permutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseMatrix {
    shape: (usize, usize),
    entries: BTreeMap<(u32, u32), u64>,
}

impl SparseMatrix {
    /// Creates an all-zero matrix with `shape = (rows, columns)`.
    pub fn new(shape: (usize, usize)) -> Self {
        Self {
            shape,
            entries: BTreeMap::new(),
        }
    }

    /// Builds a sparse matrix from dense rows. Every row must have the same length.
    pub fn from_dense(rows: &[Vec<u64>]) -> Result<Self, XswapError> {
        let columns = rows.first().map_or(0, Vec::len);
        let mut matrix = Self::new((rows.len(), columns));
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(XswapError::Input(
                    ErrorInfo::new("shape-mismatch", "dense matrix rows differ in length")
                        .with_context("row", row_idx.to_string())
                        .with_context("expected", columns.to_string())
                        .with_context("found", row.len().to_string()),
                ));
            }
            for (col_idx, &value) in row.iter().enumerate() {
                if value != 0 {
                    matrix.entries.insert((row_idx as u32, col_idx as u32), value);
                }
            }
        }
        Ok(matrix)
    }

    /// Number of rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Value stored at `(row, col)`; zero when absent.
    pub fn get(&self, row: u32, col: u32) -> u64 {
        self.entries.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Iterates non-zero entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), u64)> + '_ {
        self.entries.iter().map(|(&pos, &value)| (pos, value))
    }

    /// Sets `(row, col)` to one.
    pub fn mark(&mut self, row: u32, col: u32) -> Result<(), XswapError> {
        self.check_bounds(row, col)?;
        self.entries.insert((row, col), 1);
        Ok(())
    }

    /// Adds every entry of `other` into `self`.
    pub fn add_assign(&mut self, other: &SparseMatrix) -> Result<(), XswapError> {
        if self.shape != other.shape {
            return Err(XswapError::Input(
                ErrorInfo::new("shape-mismatch", "cannot add matrices of different shapes")
                    .with_context("left", format!("{:?}", self.shape))
                    .with_context("right", format!("{:?}", other.shape)),
            ));
        }
        for (&pos, &value) in &other.entries {
            *self.entries.entry(pos).or_insert(0) += value;
        }
        Ok(())
    }

    /// Per-row sums.
    pub fn row_sums(&self) -> Vec<u64> {
        let mut sums = vec![0; self.shape.0];
        for (&(row, _), &value) in &self.entries {
            sums[row as usize] += value;
        }
        sums
    }

    /// Per-column sums.
    pub fn col_sums(&self) -> Vec<u64> {
        let mut sums = vec![0; self.shape.1];
        for (&(_, col), &value) in &self.entries {
            sums[col as usize] += value;
        }
        sums
    }

    /// Expands into dense rows.
    pub fn to_dense(&self) -> Vec<Vec<u64>> {
        let mut rows = vec![vec![0; self.shape.1]; self.shape.0];
        for (&(row, col), &value) in &self.entries {
            rows[row as usize][col as usize] = value;
        }
        rows
    }

    fn check_bounds(&self, row: u32, col: u32) -> Result<(), XswapError> {
        if (row as usize) < self.shape.0 && (col as usize) < self.shape.1 {
            return Ok(());
        }
        Err(XswapError::Input(
            ErrorInfo::new("shape-mismatch", "edge falls outside the matrix shape")
                .with_context("edge", Edge::new(row, col).to_string())
                .with_context("shape", format!("{:?}", self.shape)),
        ))
    }
}

/// Converts an edge list into a 0/1 (bi)adjacency matrix of the given shape.
///
/// With `add_reverse_edges` every edge is mirrored across the diagonal, which
/// is how undirected graphs are represented. Leave it off for biadjacency
/// matrices, where rows and columns index different node sets.
pub fn edges_to_matrix(
    edges: &[Edge],
    add_reverse_edges: bool,
    shape: (usize, usize),
) -> Result<SparseMatrix, XswapError> {
    let mut matrix = SparseMatrix::new(shape);
    for edge in edges {
        matrix.mark(edge.source, edge.target)?;
        if add_reverse_edges {
            matrix.mark(edge.target, edge.source)?;
        }
    }
    Ok(matrix)
}

/// Converts the non-zero positions of `matrix` back into an edge list.
///
/// When `include_reverse_edges` is false only positions with `row <= col`
/// are returned, recovering one copy of each mirrored undirected edge.
pub fn matrix_to_edges(matrix: &SparseMatrix, include_reverse_edges: bool) -> Vec<Edge> {
    matrix
        .iter()
        .filter(|((row, col), _)| include_reverse_edges || row <= col)
        .map(|((row, col), _)| Edge::new(row, col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_edges_fill_both_triangles() {
        let edges = [Edge::new(1, 0), Edge::new(0, 1), Edge::new(2, 2)];
        let matrix = edges_to_matrix(&edges, true, (3, 3)).unwrap();
        assert_eq!(matrix.nnz(), 3);
        assert_eq!(matrix.get(0, 1), 1);
        assert_eq!(matrix.get(1, 0), 1);
        assert_eq!(
            matrix_to_edges(&matrix, false),
            vec![Edge::new(0, 1), Edge::new(2, 2)]
        );
    }

    #[test]
    fn biadjacency_keeps_rectangular_shape() {
        let edges = [Edge::new(0, 3), Edge::new(1, 0)];
        let matrix = edges_to_matrix(&edges, false, (2, 4)).unwrap();
        assert_eq!(matrix.row_sums(), vec![1, 1]);
        assert_eq!(matrix.col_sums(), vec![1, 0, 0, 1]);
        assert_eq!(matrix_to_edges(&matrix, true), edges.to_vec());
    }

    #[test]
    fn out_of_shape_edges_are_rejected() {
        let err = edges_to_matrix(&[Edge::new(0, 3)], true, (2, 4)).unwrap_err();
        assert_eq!(err.info().code, "shape-mismatch");
    }

    #[test]
    fn accumulation_sums_entries() {
        let a = edges_to_matrix(&[Edge::new(0, 1)], false, (2, 2)).unwrap();
        let b = edges_to_matrix(&[Edge::new(0, 1), Edge::new(1, 1)], false, (2, 2)).unwrap();
        let mut total = SparseMatrix::new((2, 2));
        total.add_assign(&a).unwrap();
        total.add_assign(&b).unwrap();
        assert_eq!(total.to_dense(), vec![vec![0, 2], vec![0, 1]]);
        assert!(total.add_assign(&SparseMatrix::new((3, 3))).is_err());
    }

    #[test]
    fn dense_rows_must_be_rectangular() {
        let matrix = SparseMatrix::from_dense(&[vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(matrix_to_edges(&matrix, true), vec![Edge::new(0, 1), Edge::new(1, 0)]);
        assert!(SparseMatrix::from_dense(&[vec![0, 1], vec![1]]).is_err());
    }
}
