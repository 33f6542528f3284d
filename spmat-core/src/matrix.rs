//! Sparse matrix with a dense-array view
//!
//! `SparseMatrix` wraps a [`CoordinateStore`] with a declared `(nrows, ncols)`
//! extent. Every in-range coordinate is readable; coordinates never written
//! read as zero. The extent only changes through the structural resize
//! operations or by loading a persisted matrix over this one.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use log::debug;

use crate::error::{Axis, Result, SpmatError};
use crate::store::CoordinateStore;
use crate::traits::{MatrixElement, MatrixOperations, SparseView};
use crate::validation::{check_index, check_len};

/// General sparse matrix with independent row and column counts
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        into = "CooRepr<T>",
        try_from = "CooRepr<T>",
        bound(
            serialize = "T: MatrixElement + serde::Serialize",
            deserialize = "T: MatrixElement + serde::Deserialize<'de>"
        )
    )
)]
pub struct SparseMatrix<T> {
    nrows: usize,
    ncols: usize,
    store: CoordinateStore<T>,
    /// Target of `Index` for coordinates with no stored entry
    zero: T,
}

impl<T: MatrixElement> Default for SparseMatrix<T> {
    /// An empty `0 x 0` matrix, typically the target of a later load
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an all-zero matrix of the given shape
    ///
    /// Nothing is allocated up front, whatever the extent.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            store: CoordinateStore::new(),
            zero: T::zero(),
        }
    }

    /// Create an `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m.store.set(i, i, T::one());
        }
        m
    }

    /// Build from dense rows; every row must have the same length
    pub fn from_dense<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let ncols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut m = Self::new(rows.len(), ncols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            check_len(ncols, row.len())?;
            for (c, &value) in row.iter().enumerate() {
                m.store.set(r, c, value);
            }
        }
        Ok(m)
    }

    /// Build from `(row, col, value)` triplets; later duplicates win
    pub fn from_triplets<I>(nrows: usize, ncols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut m = Self::new(nrows, ncols);
        for (r, c, value) in triplets {
            m.set(r, c, value)?;
        }
        Ok(m)
    }

    /// Adopt a prebuilt store, checking every entry against the extent
    pub fn from_store(nrows: usize, ncols: usize, store: CoordinateStore<T>) -> Result<Self> {
        for (r, c, _) in store.iter() {
            check_index(r, c, nrows, ncols)?;
        }
        Ok(Self::from_parts(nrows, ncols, store))
    }

    pub(crate) fn from_parts(nrows: usize, ncols: usize, store: CoordinateStore<T>) -> Self {
        Self {
            nrows,
            ncols,
            store,
            zero: T::zero(),
        }
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Shape as `(nrows, ncols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of physically stored entries
    pub fn nnz(&self) -> usize {
        self.store.nnz()
    }

    /// Underlying coordinate store
    pub fn store(&self) -> &CoordinateStore<T> {
        &self.store
    }

    /// Value at `(row, col)`; zero if never written
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        check_index(row, col, self.nrows, self.ncols)?;
        Ok(self.store.get(row, col))
    }

    /// Write `value` at `(row, col)`
    ///
    /// Writing zero evicts the stored entry. Out-of-range coordinates fail
    /// before anything is touched; the shape never grows implicitly.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        check_index(row, col, self.nrows, self.ncols)?;
        self.store.set(row, col, value);
        Ok(())
    }

    /// Iterate over stored entries as `(row, col, value)` in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.store.iter()
    }

    /// Stored non-zero entries in row-major order
    pub fn triplets(&self) -> Vec<(usize, usize, T)> {
        let mut out: Vec<_> = self.store.iter().filter(|(_, _, v)| !v.is_zero()).collect();
        out.sort_unstable_by_key(|&(r, c, _)| (r, c));
        out
    }

    /// Materialize the full dense extent
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        let mut out = alloc::vec![alloc::vec![T::zero(); self.ncols]; self.nrows];
        for (r, c, v) in self.store.iter() {
            out[r][c] = v;
        }
        out
    }

    /// Clear every entry, keeping the shape
    pub fn reset(&mut self) {
        self.store.clear();
    }

    /// Evict explicit zeros left behind by `IndexMut`
    pub fn prune(&mut self) {
        self.store.prune();
    }

    /// Transposed copy
    pub fn transpose(&self) -> Self {
        let mut store = CoordinateStore::new();
        for (r, c, v) in self.store.iter() {
            store.set(c, r, v);
        }
        Self::from_parts(self.ncols, self.nrows, store)
    }

    /// Add one all-zero row at the bottom
    pub fn expand_row(&mut self) {
        self.nrows += 1;
        debug!("expand_row: shape now {}x{}", self.nrows, self.ncols);
    }

    /// Remove the last row and discard its entries
    pub fn shrink_row(&mut self) -> Result<()> {
        if self.nrows == 0 {
            return Err(SpmatError::EmptyDimension(Axis::Row));
        }
        self.nrows -= 1;
        self.store.truncate_rows(self.nrows);
        debug!("shrink_row: shape now {}x{}", self.nrows, self.ncols);
        Ok(())
    }

    /// Add one all-zero column at the right edge
    pub fn expand_col(&mut self) {
        self.ncols += 1;
        debug!("expand_col: shape now {}x{}", self.nrows, self.ncols);
    }

    /// Remove the last column and discard its entries
    pub fn shrink_col(&mut self) -> Result<()> {
        if self.ncols == 0 {
            return Err(SpmatError::EmptyDimension(Axis::Col));
        }
        self.ncols -= 1;
        self.store.truncate_cols(self.ncols);
        debug!("shrink_col: shape now {}x{}", self.nrows, self.ncols);
        Ok(())
    }
}

impl<T: MatrixElement> PartialEq for SparseMatrix<T> {
    /// Equal iff the shapes match and every coordinate reads the same value
    fn eq(&self, other: &Self) -> bool {
        if self.shape() != other.shape() {
            return false;
        }
        self.store
            .iter()
            .all(|(r, c, v)| other.store.get(r, c) == v)
            && other
                .store
                .iter()
                .all(|(r, c, v)| self.store.get(r, c) == v)
    }
}

impl<T: MatrixElement> Index<(usize, usize)> for SparseMatrix<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        if let Err(e) = check_index(row, col, self.nrows, self.ncols) {
            panic!("{e}");
        }
        self.store.get_ref(row, col).unwrap_or(&self.zero)
    }
}

impl<T: MatrixElement> IndexMut<(usize, usize)> for SparseMatrix<T> {
    /// Writing through the returned slot may leave an explicit zero in
    /// storage; reads and equality treat it like an absent entry.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        if let Err(e) = check_index(row, col, self.nrows, self.ncols) {
            panic!("{e}");
        }
        self.store.slot_mut(row, col)
    }
}

impl<T: MatrixElement> SparseView for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Result<T> {
        self.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        self.shape()
    }

    fn nnz(&self) -> usize {
        self.store.nnz()
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Result<Vec<(usize, T)>> {
        if row_index >= self.nrows {
            return Err(SpmatError::IndexOutOfBounds {
                row: row_index,
                col: 0,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(self.store.sorted_row(row_index))
    }

    fn get_col(&self, col_index: usize) -> Result<Vec<(usize, T)>> {
        if col_index >= self.ncols {
            return Err(SpmatError::IndexOutOfBounds {
                row: 0,
                col: col_index,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        let mut out: Vec<(usize, T)> = self
            .store
            .rows()
            .filter_map(|(r, entries)| entries.get(&col_index).map(|&v| (r, v)))
            .filter(|(_, v)| !v.is_zero())
            .collect();
        out.sort_unstable_by_key(|&(r, _)| r);
        Ok(out)
    }
}

/// Serialized form: shape plus row-major `(row, col, value)` triplets
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CooRepr<T> {
    nrows: usize,
    ncols: usize,
    entries: Vec<(usize, usize, T)>,
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> From<SparseMatrix<T>> for CooRepr<T> {
    fn from(m: SparseMatrix<T>) -> Self {
        Self {
            nrows: m.nrows,
            ncols: m.ncols,
            entries: m.triplets(),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: MatrixElement> TryFrom<CooRepr<T>> for SparseMatrix<T> {
    type Error = SpmatError;

    fn try_from(repr: CooRepr<T>) -> Result<Self> {
        SparseMatrix::from_triplets(repr.nrows, repr.ncols, repr.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn make_matrices(size: usize) -> (SparseMatrix<i64>, SparseMatrix<i64>, SparseMatrix<i64>) {
        let mut mat1 = SparseMatrix::new(size, size);
        let mut mat2 = SparseMatrix::new(size, size);
        let mut mat3 = SparseMatrix::new(size, size);
        for i in 0..size {
            for j in 0..size {
                let v = (i * size + j + 1) as i64;
                mat1.set(i, j, v).unwrap();
                mat2.set(i, j, v).unwrap();
                mat3.set(i, j, 0).unwrap();
            }
        }
        (mat1, mat2, mat3)
    }

    #[test]
    fn test_basic() {
        let size = 100;
        let (mat1, mat2, mat3) = make_matrices(size);

        assert_eq!(mat1.shape(), (size, size));
        assert_eq!(mat3.shape(), (size, size));

        assert_eq!(mat1[(0, 1)], 2);
        assert_eq!(mat1[(1, 1)], 102);
        assert_eq!(mat1[(1, 99)], 200);
        assert_eq!(mat1[(99, 99)], 10000);

        for i in 0..size {
            for j in 0..size {
                assert_ne!(mat1.get(i, j).unwrap(), 0);
                assert_eq!(mat1.get(i, j), mat2.get(i, j));
                assert_eq!(mat3.get(i, j).unwrap(), 0);
            }
        }

        assert_eq!(mat1, mat2);
        assert!(!core::ptr::eq(&mat1, &mat2));
        assert_ne!(mat1, mat3);
        assert_eq!(mat3.nnz(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut m = SparseMatrix::<f64>::new(2, 3);
        assert_eq!(
            m.get(2, 0),
            Err(SpmatError::IndexOutOfBounds {
                row: 2,
                col: 0,
                nrows: 2,
                ncols: 3
            })
        );
        assert!(m.set(0, 3, 1.0).is_err());
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.nnz(), 0);

        let empty = SparseMatrix::<f64>::default();
        assert_eq!(empty.shape(), (0, 0));
        assert!(empty.get(0, 0).is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_panics_out_of_bounds() {
        let m = SparseMatrix::<i32>::new(2, 2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_explicit_zero_is_invisible() {
        let mut a = SparseMatrix::<i32>::new(3, 3);
        let b = SparseMatrix::<i32>::new(3, 3);

        a[(1, 1)] += 0;
        assert_eq!(a.nnz(), 1);
        assert_eq!(a[(1, 1)], 0);
        assert_eq!(a, b);

        a.prune();
        assert_eq!(a.nnz(), 0);

        a[(2, 0)] = 5;
        a.set(2, 0, 0).unwrap();
        assert_eq!(a.nnz(), 0);

        a[(0, 1)] = 7;
        a[(0, 1)] = 0;
        a[(0, 2)] += 0;
        assert!(a.get_row(0).unwrap().is_empty());
        assert!(a.get_col(1).unwrap().is_empty());
        assert_eq!(a.dense_row(0).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_expand_shrink_row() {
        let size = 10;
        let (mut mat1, mut mat2, mut mat3) = make_matrices(size);

        assert_eq!(mat1[(size - 1, size - 1)], (size * size) as i64);
        assert_eq!(mat3[(size - 1, size - 1)], 0);

        for m in [&mut mat1, &mut mat2, &mut mat3] {
            m.shrink_row().unwrap();
        }
        assert_eq!(mat1.shape(), (size - 1, size));
        for i in 0..mat1.nrows() {
            for j in 0..mat1.ncols() {
                assert_ne!(mat1[(i, j)], 0);
                assert_eq!(mat1[(i, j)], mat2[(i, j)]);
                assert_eq!(mat3[(i, j)], 0);
            }
        }

        for m in [&mut mat1, &mut mat2, &mut mat3] {
            m.expand_row();
        }
        assert_eq!(mat1.shape(), (size, size));
        for j in 0..size {
            assert_eq!(mat1[(size - 1, j)], 0);
            assert_eq!(mat2[(size - 1, j)], 0);
            assert_eq!(mat3[(size - 1, j)], 0);
        }
        assert_eq!(mat1[(size - 2, size - 1)], ((size - 1) * size) as i64);
    }

    #[test]
    fn test_expand_shrink_col() {
        let size = 10;
        let (mut mat1, mut mat2, _) = make_matrices(size);

        mat1.shrink_col().unwrap();
        mat2.shrink_col().unwrap();
        assert_eq!(mat1.shape(), (size, size - 1));
        assert_eq!(mat1, mat2);
        assert_eq!(mat1.nnz(), size * (size - 1));

        mat1.expand_col();
        assert_eq!(mat1.shape(), (size, size));
        for i in 0..size {
            assert_eq!(mat1[(i, size - 1)], 0);
        }
    }

    #[test]
    fn test_expand_then_shrink_restores() {
        let (mat1, _, _) = make_matrices(6);
        let mut m = mat1.clone();
        m.expand_row();
        m.shrink_row().unwrap();
        m.expand_col();
        m.shrink_col().unwrap();
        assert_eq!(m, mat1);
    }

    #[test]
    fn test_shrink_empty_fails() {
        let mut m = SparseMatrix::<f32>::new(0, 2);
        assert_eq!(m.shrink_row(), Err(SpmatError::EmptyDimension(Axis::Row)));
        m.shrink_col().unwrap();
        m.shrink_col().unwrap();
        assert_eq!(m.shrink_col(), Err(SpmatError::EmptyDimension(Axis::Col)));
        assert_eq!(m.shape(), (0, 0));
    }

    #[test]
    fn test_dense_conversions() {
        let dense = vec![vec![1.0, 0.0, 2.0], vec![0.0, 0.0, -3.5]];
        let m = SparseMatrix::from_dense(&dense).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.to_dense(), dense);
        assert_eq!(m.triplets(), vec![(0, 0, 1.0), (0, 2, 2.0), (1, 2, -3.5)]);

        let ragged = vec![vec![1, 2], vec![3]];
        assert_eq!(
            SparseMatrix::from_dense(&ragged),
            Err(SpmatError::LengthMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_identity_transpose_reset() {
        let id = SparseMatrix::<u64>::identity(4);
        assert_eq!(id.nnz(), 4);
        assert_eq!(id[(2, 2)], 1);
        assert_eq!(id[(2, 3)], 0);

        let m = SparseMatrix::from_triplets(2, 3, [(0, 2, 7u64), (1, 0, 4)]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t[(2, 0)], 7);
        assert_eq!(t[(0, 1)], 4);
        assert_eq!(t.transpose(), m);

        let mut m = m;
        m.reset();
        assert_eq!(m.nnz(), 0);
        assert_eq!(m.shape(), (2, 3));

        assert!(SparseMatrix::from_triplets(2, 2, [(2, 0, 1u64)]).is_err());
    }

    #[test]
    fn test_rows_and_cols() {
        let m = SparseMatrix::from_dense(&[[0, 5, 0], [6, 0, 7]]).unwrap();
        assert_eq!(m.get_row(1).unwrap(), vec![(0, 6), (2, 7)]);
        assert_eq!(m.get_col(1).unwrap(), vec![(0, 5)]);
        assert_eq!(m.dense_row(0).unwrap(), vec![0, 5, 0]);
        assert!(m.get_row(2).is_err());
        assert!(m.get_col(3).is_err());
    }

    #[test]
    fn test_from_store() {
        let mut store = CoordinateStore::new();
        store.set(1, 2, 3i32);
        let m = SparseMatrix::from_store(2, 3, store.clone()).unwrap();
        assert_eq!(m[(1, 2)], 3);
        assert_eq!(
            SparseMatrix::from_store(2, 2, store),
            Err(SpmatError::IndexOutOfBounds {
                row: 1,
                col: 2,
                nrows: 2,
                ncols: 2
            })
        );
    }
}
