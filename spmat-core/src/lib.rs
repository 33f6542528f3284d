#![no_std]

//! SPMAT Core - Sparse Matrix and Sparse Graph Containers
//!
//! This crate provides the in-memory sparse containers, their arithmetic and
//! the SPMAT text format. It performs no I/O; reading and writing files is
//! left to the `spmat` crate.
//!
//! Only non-zero entries are stored. Every read of an unstored coordinate
//! yields the element type's zero, and writing zero through [`SparseMatrix::set`]
//! removes the entry.

extern crate alloc;

pub mod error;
pub mod format;
pub mod graph;
pub mod matrix;
pub mod ops;
pub mod store;
pub mod traits;
pub mod validation;

pub use error::{Axis, ErrorCategory, Result, SpmatError};
pub use format::{decode, encode, encode_into, read_header, DataType, TextHeader};
pub use graph::SparseGraph;
pub use matrix::SparseMatrix;
pub use ops::multiply_row;
pub use store::{CoordinateStore, RowEntries};
pub use traits::{MatrixElement, MatrixOperations, SparseView};
