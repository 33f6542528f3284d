//! Text format definitions for persisted containers
//!
//! A persisted container is plain UTF-8 text, version 1:
//!
//! ```text
//! SPMAT 1 f64
//! 2 3
//! 1 0 2.5
//! 0 0 -4
//! ```
//!
//! The first line holds the magic token, the format version and the element
//! type tag. The second holds `nrows ncols`. Then exactly `nrows` lines follow,
//! each with exactly `ncols` values separated by single spaces, zeros
//! included, so the dense extent is unambiguous on reload. Blank lines after
//! the last row are ignored; anything else there is rejected.
//!
//! This module is pure string handling; file access lives in the `spmat`
//! crate.

pub mod constants;
pub mod header;
pub mod text;

pub use header::{DataType, TextHeader};
pub use text::{decode, encode, encode_into, read_header};
