//! Sparse weighted graph
//!
//! A graph is a square [`SparseMatrix`] addressed by vertex count. Entry
//! `(from, to)` holds the weight of the edge `from -> to`; zero means no edge.
//! Squareness is enforced when the graph is built and whenever a matrix is
//! converted into one, and node insertion/removal resize both axes together.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use log::debug;

use crate::error::{Axis, Result, SpmatError};
use crate::matrix::SparseMatrix;
use crate::traits::{MatrixElement, MatrixOperations, SparseView};
use crate::validation::check_square;

/// Square sparse adjacency/weight matrix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "SparseMatrix<T>",
        try_from = "SparseMatrix<T>",
        bound(
            serialize = "T: MatrixElement + serde::Serialize",
            deserialize = "T: MatrixElement + serde::Deserialize<'de>"
        )
    )
)]
pub struct SparseGraph<T: MatrixElement> {
    adj: SparseMatrix<T>,
}

impl<T: MatrixElement> Default for SparseGraph<T> {
    /// A graph with no vertices, typically the target of a later load
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: MatrixElement> SparseGraph<T> {
    /// Create a graph of `dim` vertices and no edges
    pub fn new(dim: usize) -> Self {
        Self {
            adj: SparseMatrix::new(dim, dim),
        }
    }

    /// Create a graph with a unit self-loop on every vertex
    pub fn identity(dim: usize) -> Self {
        Self {
            adj: SparseMatrix::identity(dim),
        }
    }

    /// Build from dense adjacency rows; must be square
    pub fn from_dense<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        Self::try_from(SparseMatrix::from_dense(rows)?)
    }

    /// Number of vertices
    pub fn dim(&self) -> usize {
        self.adj.nrows()
    }

    /// Number of edges
    ///
    /// Zero weights written through `IndexMut` are not edges and are not counted.
    pub fn nnz(&self) -> usize {
        self.adj.iter().filter(|(_, _, w)| !w.is_zero()).count()
    }

    /// Weight of edge `from -> to`, zero if absent
    pub fn get(&self, from: usize, to: usize) -> Result<T> {
        self.adj.get(from, to)
    }

    /// Set the weight of edge `from -> to`; zero removes the edge
    pub fn set(&mut self, from: usize, to: usize, weight: T) -> Result<()> {
        self.adj.set(from, to, weight)
    }

    /// Outgoing edges of `node` as `(to, weight)`, ordered by target
    pub fn neighbors(&self, node: usize) -> Result<Vec<(usize, T)>> {
        self.adj.get_row(node)
    }

    /// All edges as `(from, to, weight)` in row-major order
    pub fn edges(&self) -> Vec<(usize, usize, T)> {
        self.adj.triplets()
    }

    /// Append an isolated vertex
    pub fn add_node(&mut self) {
        self.adj.expand_row();
        self.adj.expand_col();
        debug!("add_node: dim now {}", self.dim());
    }

    /// Remove the last vertex and every edge touching it
    pub fn remove_node(&mut self) -> Result<()> {
        if self.dim() == 0 {
            return Err(SpmatError::EmptyDimension(Axis::Row));
        }
        self.adj.shrink_row()?;
        self.adj.shrink_col()?;
        debug!("remove_node: dim now {}", self.dim());
        Ok(())
    }

    /// Remove every edge, keeping the vertex count
    pub fn reset(&mut self) {
        self.adj.reset();
    }

    /// Replace the edges with unit self-loops
    pub fn reset_identity(&mut self) {
        self.adj = SparseMatrix::identity(self.dim());
    }

    /// Graph product, e.g. two-step path weights for `g.multiply(&g)`
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        Ok(Self {
            adj: self.adj.multiply(&rhs.adj)?,
        })
    }

    /// Borrow the adjacency matrix
    pub fn as_matrix(&self) -> &SparseMatrix<T> {
        &self.adj
    }

    /// Take the adjacency matrix
    pub fn into_matrix(self) -> SparseMatrix<T> {
        self.adj
    }
}

impl<T: MatrixElement> TryFrom<SparseMatrix<T>> for SparseGraph<T> {
    type Error = SpmatError;

    fn try_from(adj: SparseMatrix<T>) -> Result<Self> {
        check_square(adj.nrows(), adj.ncols())?;
        Ok(Self { adj })
    }
}

impl<T: MatrixElement> From<SparseGraph<T>> for SparseMatrix<T> {
    fn from(graph: SparseGraph<T>) -> Self {
        graph.adj
    }
}

impl<T: MatrixElement> Index<(usize, usize)> for SparseGraph<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        &self.adj[index]
    }
}

impl<T: MatrixElement> IndexMut<(usize, usize)> for SparseGraph<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        &mut self.adj[index]
    }
}

impl<T: MatrixElement> SparseView for SparseGraph<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Result<T> {
        self.adj.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        self.adj.shape()
    }

    fn nnz(&self) -> usize {
        SparseGraph::nnz(self)
    }
}

impl<T: MatrixElement> MatrixOperations for SparseGraph<T> {
    fn get_row(&self, row_index: usize) -> Result<Vec<(usize, T)>> {
        self.adj.get_row(row_index)
    }

    fn get_col(&self, col_index: usize) -> Result<Vec<(usize, T)>> {
        self.adj.get_col(col_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn make_graphs(size: usize) -> (SparseGraph<f64>, SparseGraph<f64>, SparseGraph<f64>) {
        let mut gra1 = SparseGraph::new(size);
        let mut gra2 = SparseGraph::new(size);
        let mut gra3 = SparseGraph::new(size);
        for i in 0..size {
            for j in 0..size {
                let v = (i * size + j + 1) as f64;
                gra1.set(i, j, v).unwrap();
                gra2.set(i, j, v).unwrap();
                gra3.set(i, j, 0.0).unwrap();
            }
        }
        (gra1, gra2, gra3)
    }

    #[test]
    fn test_basic() {
        let size = 100;
        let (gra1, gra2, gra3) = make_graphs(size);

        assert_eq!(gra1.dim(), size);
        assert_eq!(gra2.dim(), size);
        assert_eq!(gra3.dim(), size);

        assert_eq!(gra1[(0, 1)], 2.0);
        assert_eq!(gra1[(1, 1)], (size + 2) as f64);
        assert_eq!(gra1[(1, size - 1)], (size * 2) as f64);
        assert_eq!(gra1[(size - 1, size - 1)], (size * size) as f64);

        for i in 0..size {
            for j in 0..size {
                assert_ne!(gra1[(i, j)], 0.0);
                assert_eq!(gra1[(i, j)], gra2[(i, j)]);
                assert_eq!(gra3[(i, j)], 0.0);
            }
        }

        assert_eq!(gra1, gra2);
        assert_ne!(gra1, gra3);
    }

    #[test]
    fn test_add_remove_node() {
        let (mut g, _, _) = make_graphs(4);
        g.remove_node().unwrap();
        assert_eq!(g.dim(), 3);
        assert_eq!(g.nnz(), 9);

        g.add_node();
        assert_eq!(g.dim(), 4);
        assert!(g.neighbors(3).unwrap().is_empty());
        assert_eq!(g.get(0, 3).unwrap(), 0.0);
        assert_eq!(g.as_matrix().shape(), (4, 4));

        let mut empty = SparseGraph::<f64>::default();
        assert_eq!(
            empty.remove_node(),
            Err(SpmatError::EmptyDimension(Axis::Row))
        );
        assert_eq!(empty.dim(), 0);
    }

    #[test]
    fn test_square_enforced() {
        let rect = SparseMatrix::<i32>::new(2, 3);
        assert_eq!(
            SparseGraph::try_from(rect),
            Err(SpmatError::NotSquare { nrows: 2, ncols: 3 })
        );
        assert!(SparseGraph::from_dense(&[[1, 2]]).is_err());

        let g = SparseGraph::from_dense(&[[0, 1], [1, 0]]).unwrap();
        assert_eq!(g.edges(), vec![(0, 1, 1), (1, 0, 1)]);
    }

    #[test]
    fn test_two_step_paths() {
        // 0 -> 1 -> 2
        let mut g = SparseGraph::<u32>::new(3);
        g.set(0, 1, 1).unwrap();
        g.set(1, 2, 1).unwrap();

        let two = g.multiply(&g).unwrap();
        assert_eq!(two.edges(), vec![(0, 2, 1)]);
        assert_eq!(
            g.multiply(&SparseGraph::new(2)).map(|g| g.dim()),
            Err(SpmatError::ShapeMismatch {
                left: (3, 3),
                right: (2, 2)
            })
        );
    }

    #[test]
    fn test_zero_weight_is_not_an_edge() {
        let mut g = SparseGraph::<i32>::new(3);
        g[(0, 1)] = 5;
        g[(0, 1)] = 0;
        g[(0, 2)] += 0;

        assert!(g.neighbors(0).unwrap().is_empty());
        assert!(g.get_col(1).unwrap().is_empty());
        assert!(g.edges().is_empty());
        assert_eq!(g.nnz(), 0);
        assert_eq!(SparseView::nnz(&g), 0);
        assert_eq!(g, SparseGraph::new(3));

        g[(2, 0)] = 4;
        assert_eq!(g.neighbors(2).unwrap(), vec![(0, 4)]);
        assert_eq!(g.nnz(), 1);
    }

    #[test]
    fn test_reset() {
        let (mut g, _, _) = make_graphs(3);
        g.reset();
        assert_eq!(g.nnz(), 0);
        assert_eq!(g.dim(), 3);

        g.reset_identity();
        assert_eq!(g, SparseGraph::identity(3));
        assert_eq!(g.into_matrix(), SparseMatrix::identity(3));
    }
}
