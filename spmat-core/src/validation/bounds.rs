//! Coordinate and shape validation
//!
//! This module provides pure validation functions for container
//! coordinates and operand shapes.

use crate::error::{Result, SpmatError};

/// Validate that `(row, col)` lies inside `[0, nrows) x [0, ncols)`
pub const fn check_index(row: usize, col: usize, nrows: usize, ncols: usize) -> Result<()> {
    if row >= nrows || col >= ncols {
        return Err(SpmatError::IndexOutOfBounds {
            row,
            col,
            nrows,
            ncols,
        });
    }
    Ok(())
}

/// Validate that two shapes are identical (element-wise operations)
pub const fn check_same_shape(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(SpmatError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// Validate that `left * right` is defined, i.e. `left.ncols == right.nrows`
pub const fn check_inner_dims(left: (usize, usize), right: (usize, usize)) -> Result<()> {
    if left.1 != right.0 {
        return Err(SpmatError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// Validate that a shape is square
pub const fn check_square(nrows: usize, ncols: usize) -> Result<()> {
    if nrows != ncols {
        return Err(SpmatError::NotSquare { nrows, ncols });
    }
    Ok(())
}

/// Validate the length of a dense operand
pub const fn check_len(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(SpmatError::LengthMismatch { expected, found });
    }
    Ok(())
}
