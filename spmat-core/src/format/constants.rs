//! Format constants for the SPMAT text layout

/// Magic token opening every persisted container
pub const MAGIC: &str = "SPMAT";

/// Current text format version
pub const VERSION: u32 = 1;

/// Separator between values on a row line
pub const VALUE_SEPARATOR: char = ' ';

/// Number of whitespace-separated tokens on the shape line
pub const SHAPE_TOKENS: usize = 2;
