//! Arithmetic on sparse matrices
//!
//! The product kernel walks only stored entries: for every stored `A[i,k]` it
//! visits the stored entries of row `k` of `B`. Absent entries contribute
//! nothing, which is exactly what their zero value would contribute to the
//! dense sum, so the result matches dense multiplication over the declared
//! shapes.

use alloc::vec::Vec;
use core::ops::{Add, Div, Mul, Sub};

use log::{debug, trace};

use crate::error::{Result, SpmatError};
use crate::matrix::SparseMatrix;
use crate::store::{CoordinateStore, RowEntries};
use crate::traits::MatrixElement;
use crate::validation::{check_inner_dims, check_len, check_same_shape};

/// One row of `A * B`, given the stored entries of row `i` of `A`
///
/// Terms are accumulated in ascending `k`, the same order a dense triple loop
/// uses, so floating point results do not depend on hash order. Sums that
/// cancel to zero are dropped.
pub fn multiply_row<T: MatrixElement>(
    row_a: &RowEntries<T>,
    b: &SparseMatrix<T>,
) -> RowEntries<T> {
    let mut terms: Vec<(usize, T)> = row_a.iter().map(|(&k, &v)| (k, v)).collect();
    terms.sort_unstable_by_key(|&(k, _)| k);

    let mut acc = RowEntries::new();
    for (k, a_ik) in terms {
        let Some(row_b) = b.store().row(k) else {
            continue;
        };
        for (&j, &b_kj) in row_b {
            let slot = acc.entry(j).or_insert_with(T::zero);
            *slot = *slot + a_ik * b_kj;
        }
    }
    acc.retain(|_, v| !v.is_zero());
    acc
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Matrix product `self * rhs`
    ///
    /// Requires `self.ncols() == rhs.nrows()`; the result has shape
    /// `(self.nrows(), rhs.ncols())`.
    pub fn multiply(&self, rhs: &Self) -> Result<Self> {
        check_inner_dims(self.shape(), rhs.shape())?;

        let mut store = CoordinateStore::new();
        for (i, row_a) in self.store().rows() {
            let row = multiply_row(row_a, rhs);
            trace!("multiply: row {} produced {} entries", i, row.len());
            store.replace_row(i, row);
        }

        let out = SparseMatrix::from_parts(self.nrows(), rhs.ncols(), store);
        debug!(
            "multiply: {}x{} ({} nnz) * {}x{} ({} nnz) -> {} nnz",
            self.nrows(),
            self.ncols(),
            self.nnz(),
            rhs.nrows(),
            rhs.ncols(),
            rhs.nnz(),
            out.nnz()
        );
        Ok(out)
    }

    /// Element-wise sum; shapes must match
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Element-wise difference; shapes must match
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, |a, b| a - b)
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self> {
        check_same_shape(self.shape(), rhs.shape())?;
        let mut out = self.clone();
        out.prune();
        // Entries only in `self` pair with an implicit zero on the right
        for (r, c, a) in self.iter() {
            if rhs.store().get_ref(r, c).is_none() {
                out.set(r, c, f(a, T::zero()))?;
            }
        }
        for (r, c, b) in rhs.iter() {
            out.set(r, c, f(self.store().get(r, c), b))?;
        }
        Ok(out)
    }

    /// Multiply every entry by `alpha`
    pub fn scale(&self, alpha: T) -> Self {
        self.map_stored(|v| v * alpha)
    }

    /// Divide every entry by `alpha`
    ///
    /// A zero divisor is rejected: the implicit zeros would have to become
    /// `0 / 0`, which sparse storage cannot represent.
    pub fn div_scalar(&self, alpha: T) -> Result<Self> {
        if alpha.is_zero() {
            return Err(SpmatError::DivisionByZero);
        }
        Ok(self.map_stored(|v| v / alpha))
    }

    fn map_stored(&self, f: impl Fn(T) -> T) -> Self {
        let mut store = CoordinateStore::new();
        for (r, c, v) in self.iter() {
            store.set(r, c, f(v));
        }
        SparseMatrix::from_parts(self.nrows(), self.ncols(), store)
    }

    /// Matrix-vector product `self * x`; `x.len()` must equal `ncols()`
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>> {
        check_len(self.ncols(), x.len())?;
        let mut y = alloc::vec![T::zero(); self.nrows()];
        for (r, _) in self.store().rows() {
            y[r] = self
                .store()
                .sorted_row(r)
                .into_iter()
                .fold(T::zero(), |acc, (c, v)| acc + v * x[c]);
        }
        Ok(y)
    }
}

fn unwrap_op<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}

/// # Panics
///
/// Panics if `self.ncols() != rhs.nrows()`; use [`SparseMatrix::multiply`]
/// for a fallible product.
impl<'a, T: MatrixElement> Mul<&'a SparseMatrix<T>> for &'a SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn mul(self, rhs: &'a SparseMatrix<T>) -> SparseMatrix<T> {
        unwrap_op(self.multiply(rhs))
    }
}

impl<T: MatrixElement> Mul for SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn mul(self, rhs: SparseMatrix<T>) -> SparseMatrix<T> {
        &self * &rhs
    }
}

/// # Panics
///
/// Panics if the shapes differ.
impl<'a, T: MatrixElement> Add<&'a SparseMatrix<T>> for &'a SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn add(self, rhs: &'a SparseMatrix<T>) -> SparseMatrix<T> {
        unwrap_op(SparseMatrix::add(self, rhs))
    }
}

/// # Panics
///
/// Panics if the shapes differ.
impl<'a, T: MatrixElement> Sub<&'a SparseMatrix<T>> for &'a SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn sub(self, rhs: &'a SparseMatrix<T>) -> SparseMatrix<T> {
        unwrap_op(SparseMatrix::sub(self, rhs))
    }
}

macro_rules! impl_scalar_ops {
    ($($ty:ty),*) => {
        $(
            impl Mul<$ty> for &SparseMatrix<$ty> {
                type Output = SparseMatrix<$ty>;

                fn mul(self, alpha: $ty) -> SparseMatrix<$ty> {
                    self.scale(alpha)
                }
            }

            /// # Panics
            ///
            /// Panics if `alpha` is zero.
            impl Div<$ty> for &SparseMatrix<$ty> {
                type Output = SparseMatrix<$ty>;

                fn div(self, alpha: $ty) -> SparseMatrix<$ty> {
                    unwrap_op(self.div_scalar(alpha))
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64, i32, i64, u32, u64);
