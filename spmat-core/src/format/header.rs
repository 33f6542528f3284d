//! Header definitions for the SPMAT text format
//!
//! This module contains the two-line header structure and the element
//! type tag it carries.

use super::constants::{MAGIC, SHAPE_TOKENS, VERSION};
use crate::error::{Result, SpmatError};
use crate::validation::{parse_usize, parse_version};

/// Header of a persisted container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextHeader {
    /// Format version
    pub version: u32,
    /// Element type tag
    pub data_type: DataType,
    /// Number of rows
    pub nrows: usize,
    /// Number of columns
    pub ncols: usize,
}

impl TextHeader {
    /// Magic token for persisted containers
    pub const MAGIC: &'static str = MAGIC;

    /// Current format version
    pub const VERSION: u32 = VERSION;

    /// Create a header for the current version
    pub const fn new(data_type: DataType, nrows: usize, ncols: usize) -> Self {
        Self {
            version: Self::VERSION,
            data_type,
            nrows,
            ncols,
        }
    }

    /// Whether this build can read the declared version
    pub fn is_valid(&self) -> bool {
        self.version >= 1 && self.version <= Self::VERSION
    }

    /// Total number of values the body must hold
    pub fn value_count(&self) -> Option<usize> {
        self.nrows.checked_mul(self.ncols)
    }

    /// Parse the header from its two lines
    pub fn parse(magic_line: &str, shape_line: &str) -> Result<Self> {
        let mut tokens = magic_line.split_ascii_whitespace();
        if tokens.next() != Some(Self::MAGIC) {
            return Err(SpmatError::InvalidHeader);
        }
        let version = parse_version(tokens.next().ok_or(SpmatError::InvalidHeader)?)?;
        let data_type = tokens
            .next()
            .ok_or(SpmatError::InvalidHeader)
            .and_then(|t| DataType::from_token(t).ok_or(SpmatError::UnknownDataType))?;
        if tokens.next().is_some() {
            return Err(SpmatError::InvalidHeader);
        }

        let header = Self {
            version,
            data_type,
            nrows: 0,
            ncols: 0,
        };
        if !header.is_valid() {
            return Err(SpmatError::UnsupportedVersion(version));
        }

        let shape = split_shape(shape_line)?;
        let nrows = parse_usize(shape[0])?;
        let ncols = parse_usize(shape[1])?;

        let header = Self {
            nrows,
            ncols,
            ..header
        };
        header.value_count().ok_or(SpmatError::InvalidShape)?;
        Ok(header)
    }

    /// Write both header lines, each terminated by a newline
    pub fn write_to<W: core::fmt::Write>(&self, out: &mut W) -> core::fmt::Result {
        writeln!(out, "{} {} {}", Self::MAGIC, self.version, self.data_type)?;
        writeln!(out, "{} {}", self.nrows, self.ncols)
    }
}

/// Split the shape line into exactly two tokens
fn split_shape(line: &str) -> Result<[&str; SHAPE_TOKENS]> {
    let mut out = [""; SHAPE_TOKENS];
    let mut count = 0;
    for token in line.split_ascii_whitespace() {
        if count == SHAPE_TOKENS {
            return Err(SpmatError::InvalidShape);
        }
        out[count] = token;
        count += 1;
    }
    if count != SHAPE_TOKENS {
        return Err(SpmatError::InvalidShape);
    }
    Ok(out)
}

impl core::fmt::Display for TextHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.write_to(f)
    }
}

/// Element data types supported by the format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    /// 32-bit floating point
    F32,
    /// 64-bit floating point
    F64,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
}

impl DataType {
    /// Parse the header token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "f32" => Some(DataType::F32),
            "f64" => Some(DataType::F64),
            "i32" => Some(DataType::I32),
            "i64" => Some(DataType::I64),
            "u32" => Some(DataType::U32),
            "u64" => Some(DataType::U64),
            _ => None,
        }
    }

    /// The header token
    pub const fn as_str(self) -> &'static str {
        match self {
            DataType::F32 => "f32",
            DataType::F64 => "f64",
            DataType::I32 => "i32",
            DataType::I64 => "i64",
            DataType::U32 => "u32",
            DataType::U64 => "u64",
        }
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
