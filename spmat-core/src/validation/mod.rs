//! Validation utilities
//!
//! Pure checks on coordinates, shapes and format strings with no I/O
//! dependencies. Every check runs before any mutation of its target.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_index, check_inner_dims, check_len, check_same_shape, check_square};
pub use parsing::{parse_usize, parse_value, parse_version};
