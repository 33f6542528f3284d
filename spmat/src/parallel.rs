//! Row-parallel sparse multiplication

use log::debug;
use rayon::prelude::*;
use spmat_core::store::{CoordinateStore, RowEntries};
use spmat_core::validation::check_inner_dims;
use spmat_core::{multiply_row, MatrixElement, SparseMatrix};

use crate::error::Result;

/// `a * b` with the stored rows of `a` distributed over the rayon pool
///
/// Same contract and same result as [`SparseMatrix::multiply`]: each output
/// row is produced by the same kernel, so floating point sums match exactly.
pub fn par_multiply<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    check_inner_dims(a.shape(), b.shape())?;

    let rows: Vec<(usize, &RowEntries<T>)> = a.store().rows().collect();
    let products: Vec<(usize, RowEntries<T>)> = rows
        .into_par_iter()
        .map(|(i, row)| (i, multiply_row(row, b)))
        .collect();

    let mut store = CoordinateStore::new();
    for (i, row) in products {
        store.replace_row(i, row);
    }
    debug!(
        "par_multiply: {} threads, {} rows -> {} nnz",
        rayon::current_num_threads(),
        a.store().rows().count(),
        store.nnz()
    );

    Ok(SparseMatrix::from_store(a.nrows(), b.ncols(), store)?)
}
