//! Abstract interfaces shared by the sparse containers
//!
//! Traits here are pure interfaces; the concrete containers live in
//! `matrix` and `graph`.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixOperations, SparseView};
