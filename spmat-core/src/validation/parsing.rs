//! Parsing utilities for the text format
//!
//! This module provides pure parsing functions for the tokens that make up
//! a persisted container, with no I/O dependencies.

use crate::error::{Result, SpmatError};
use crate::traits::MatrixElement;

/// Parse a usize from a shape token
///
/// Only plain ASCII digits are accepted; signs, whitespace and overflow are
/// rejected as `InvalidShape`.
pub fn parse_usize(s: &str) -> Result<usize> {
    if s.is_empty() {
        return Err(SpmatError::InvalidShape);
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(SpmatError::InvalidShape);
        }

        let digit = (byte - b'0') as usize;

        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add(digit))
            .ok_or(SpmatError::InvalidShape)?;
    }

    Ok(result)
}

/// Parse a format version token
pub fn parse_version(s: &str) -> Result<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SpmatError::InvalidHeader);
    }
    s.parse::<u32>().map_err(|_| SpmatError::InvalidHeader)
}

/// Parse one stored value, tagging failures with its coordinate
pub fn parse_value<T: MatrixElement>(s: &str, row: usize, col: usize) -> Result<T> {
    s.parse::<T>()
        .map_err(|_| SpmatError::InvalidValue { row, col })
}
