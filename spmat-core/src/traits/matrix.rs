//! Core container abstraction traits
//!
//! Both the general matrix and the square graph expose the same read-only
//! view, so codecs and comparisons can be written once against these traits.

use alloc::vec::Vec;

use super::element::MatrixElement;
use crate::error::Result;

/// Read-only dense view over a sparse container
pub trait SparseView {
    /// The element type stored in this container
    type Element: MatrixElement;

    /// Get the value at the specified position
    ///
    /// Absent entries read as `Element::zero()`. Fails with
    /// `IndexOutOfBounds` if the position lies outside the declared shape.
    fn get_element(&self, row: usize, col: usize) -> Result<Self::Element>;

    /// Get container dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of entries physically stored
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column extraction
pub trait MatrixOperations: SparseView {
    /// Get the stored entries of a row as `(col, value)`, in column order
    fn get_row(&self, row_index: usize) -> Result<Vec<(usize, Self::Element)>>;

    /// Get the stored entries of a column as `(row, value)`, in row order
    fn get_col(&self, col_index: usize) -> Result<Vec<(usize, Self::Element)>>;

    /// Materialize one row including zeros
    fn dense_row(&self, row_index: usize) -> Result<Vec<Self::Element>> {
        let (_, ncols) = self.dimensions();
        let mut out = alloc::vec![Self::Element::zero(); ncols];
        for (col, value) in self.get_row(row_index)? {
            out[col] = value;
        }
        Ok(out)
    }
}
