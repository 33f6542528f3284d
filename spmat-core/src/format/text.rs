//! Encoding and decoding of the SPMAT text body
//!
//! Decoding builds a fresh matrix and returns it only once the whole input
//! has been validated, so callers can swap it into place atomically.

use alloc::string::String;
use core::fmt::Write;

use log::trace;

use super::constants::VALUE_SEPARATOR;
use super::header::TextHeader;
use crate::error::{Result, SpmatError};
use crate::matrix::SparseMatrix;
use crate::store::{CoordinateStore, RowEntries};
use crate::traits::{MatrixElement, MatrixOperations};
use crate::validation::parse_value;

/// Encode a container as SPMAT text
pub fn encode<M: MatrixOperations>(matrix: &M) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = encode_into(matrix, &mut out);
    out
}

/// Encode a container into any `fmt::Write` sink
pub fn encode_into<M, W>(matrix: &M, out: &mut W) -> core::fmt::Result
where
    M: MatrixOperations,
    W: Write,
{
    let (nrows, ncols) = matrix.dimensions();
    TextHeader::new(M::Element::data_type(), nrows, ncols).write_to(out)?;

    for row in 0..nrows {
        let mut next_col = 0;
        let stored = matrix.get_row(row).map_err(|_| core::fmt::Error)?;
        for (col, value) in stored {
            while next_col < col {
                write_value(out, next_col, M::Element::zero())?;
                next_col += 1;
            }
            write_value(out, col, value)?;
            next_col = col + 1;
        }
        while next_col < ncols {
            write_value(out, next_col, M::Element::zero())?;
            next_col += 1;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

fn write_value<W: Write, T: MatrixElement>(out: &mut W, col: usize, value: T) -> core::fmt::Result {
    if col > 0 {
        out.write_char(VALUE_SEPARATOR)?;
    }
    write!(out, "{value}")
}

/// Parse only the header of SPMAT text
pub fn read_header(input: &str) -> Result<TextHeader> {
    let mut lines = input.lines();
    let magic = lines.next().ok_or(SpmatError::InvalidHeader)?;
    let shape = lines.next().ok_or(SpmatError::InvalidShape)?;
    TextHeader::parse(magic, shape)
}

/// Decode SPMAT text into a matrix of element type `T`
///
/// The header's data type must match `T`. Zeros in the body are not stored.
pub fn decode<T: MatrixElement>(input: &str) -> Result<SparseMatrix<T>> {
    let mut lines = input.lines();
    let magic = lines.next().ok_or(SpmatError::InvalidHeader)?;
    let shape = lines.next().ok_or(SpmatError::InvalidShape)?;
    let header = TextHeader::parse(magic, shape)?;

    if header.data_type != T::data_type() {
        return Err(SpmatError::DataTypeMismatch {
            expected: T::data_type(),
            found: header.data_type,
        });
    }

    let mut store = CoordinateStore::new();
    for row in 0..header.nrows {
        let line = lines.next().ok_or(SpmatError::RowCountMismatch {
            expected: header.nrows,
            found: row,
        })?;

        let mut entries = RowEntries::new();
        let mut found = 0;
        for token in line.split_ascii_whitespace() {
            if found < header.ncols {
                let value: T = parse_value(token, row, found)?;
                if !value.is_zero() {
                    entries.insert(found, value);
                }
            }
            found += 1;
        }
        if found != header.ncols {
            return Err(SpmatError::RowLengthMismatch {
                row,
                expected: header.ncols,
                found,
            });
        }
        store.replace_row(row, entries);
    }

    if lines.any(|line| !line.trim().is_empty()) {
        return Err(SpmatError::TrailingData);
    }

    trace!(
        "decoded {}x{} {} ({} nnz)",
        header.nrows,
        header.ncols,
        header.data_type,
        store.nnz()
    );
    Ok(SparseMatrix::from_parts(header.nrows, header.ncols, store))
}
