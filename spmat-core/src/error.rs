//! Error types for sparse container operations

use crate::format::DataType;

/// Axis of a two-dimensional container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Col => write!(f, "column"),
        }
    }
}

/// Broad classes of failure, one per kind of contract a caller can break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A coordinate or vector length fell outside the declared extent
    Bounds,
    /// Two operands (or a file and its target) have incompatible shapes
    Shape,
    /// A structural resize would take a dimension below zero
    Structure,
    /// An arithmetic operation has no sparse representation
    Arithmetic,
    /// Persisted data is malformed, truncated or inconsistent
    Format,
}

/// Errors that can occur during sparse container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Coordinate outside `[0, nrows) x [0, ncols)`
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Dense operand has the wrong length
    LengthMismatch { expected: usize, found: usize },
    /// Operand shapes are incompatible for the requested operation
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A graph requires `nrows == ncols`
    NotSquare { nrows: usize, ncols: usize },
    /// Shrink attempted on an axis that is already empty
    EmptyDimension(Axis),
    /// Scalar division by zero
    DivisionByZero,
    /// Missing or unrecognized header line
    InvalidHeader,
    /// Header declares a newer format version than this build reads
    UnsupportedVersion(u32),
    /// Header names a data type this build does not know
    UnknownDataType,
    /// Header data type differs from the requested element type
    DataTypeMismatch { expected: DataType, found: DataType },
    /// Shape line is missing or malformed
    InvalidShape,
    /// A value line holds the wrong number of values
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The number of value lines differs from the declared row count
    RowCountMismatch { expected: usize, found: usize },
    /// A value could not be parsed as the element type
    InvalidValue { row: usize, col: usize },
    /// Non-blank content after the last declared row
    TrailingData,
    /// Input is not valid UTF-8 text
    InvalidEncoding,
}

impl SpmatError {
    /// Classify the error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::IndexOutOfBounds { .. } | SpmatError::LengthMismatch { .. } => {
                ErrorCategory::Bounds
            }
            SpmatError::ShapeMismatch { .. } | SpmatError::NotSquare { .. } => ErrorCategory::Shape,
            SpmatError::EmptyDimension(_) => ErrorCategory::Structure,
            SpmatError::DivisionByZero => ErrorCategory::Arithmetic,
            SpmatError::InvalidHeader
            | SpmatError::UnsupportedVersion(_)
            | SpmatError::UnknownDataType
            | SpmatError::DataTypeMismatch { .. }
            | SpmatError::InvalidShape
            | SpmatError::RowLengthMismatch { .. }
            | SpmatError::RowCountMismatch { .. }
            | SpmatError::InvalidValue { .. }
            | SpmatError::TrailingData
            | SpmatError::InvalidEncoding => ErrorCategory::Format,
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "Index ({row}, {col}) out of bounds for {nrows}x{ncols} matrix"
            ),
            SpmatError::LengthMismatch { expected, found } => {
                write!(f, "Expected a vector of length {expected}, found {found}")
            }
            SpmatError::ShapeMismatch { left, right } => write!(
                f,
                "Incompatible shapes {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            SpmatError::NotSquare { nrows, ncols } => {
                write!(f, "Graph requires a square matrix, found {nrows}x{ncols}")
            }
            SpmatError::EmptyDimension(axis) => {
                write!(f, "Cannot shrink {axis}: dimension is already zero")
            }
            SpmatError::DivisionByZero => write!(f, "Division by zero"),
            SpmatError::InvalidHeader => write!(f, "Invalid SPMAT header"),
            SpmatError::UnsupportedVersion(v) => write!(f, "Unsupported format version {v}"),
            SpmatError::UnknownDataType => write!(f, "Unknown data type"),
            SpmatError::DataTypeMismatch { expected, found } => {
                write!(f, "Data type mismatch: expected {expected}, found {found}")
            }
            SpmatError::InvalidShape => write!(f, "Invalid shape line"),
            SpmatError::RowLengthMismatch {
                row,
                expected,
                found,
            } => write!(f, "Row {row} holds {found} values, expected {expected}"),
            SpmatError::RowCountMismatch { expected, found } => {
                write!(f, "Found {found} rows, expected {expected}")
            }
            SpmatError::InvalidValue { row, col } => {
                write!(f, "Unparsable value at ({row}, {col})")
            }
            SpmatError::TrailingData => write!(f, "Trailing data after last row"),
            SpmatError::InvalidEncoding => write!(f, "Input is not valid UTF-8"),
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse container operations
pub type Result<T> = core::result::Result<T, SpmatError>;
