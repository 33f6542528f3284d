//! SPMAT - Sparse Matrix and Sparse Graph Containers
//!
//! This library provides sparse matrix and sparse graph containers that read
//! and write like dense 2-D arrays while storing only non-zero entries, plus
//! file persistence in the SPMAT text format.
//!
//! ## Architecture
//!
//! SPMAT follows a core/implementation separation:
//!
//! - **spmat-core**: Containers, arithmetic, text format and validation (`no_std`, no I/O)
//! - **spmat**: File persistence, memory-mapped loading, JSON snapshots and parallel multiply
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{Persist, SparseMatrix};
//!
//! fn example() -> spmat::Result<()> {
//!     let mut m = SparseMatrix::<f64>::new(100, 100);
//!     m.set(3, 7, 2.5)?;
//!     m.save("matrix.spmat")?;
//!
//!     let mut loaded = SparseMatrix::<f64>::default();
//!     loaded.load("matrix.spmat")?;
//!     assert_eq!(loaded, m);
//!
//!     let product = &loaded * &loaded;
//!     println!("product holds {} entries", product.nnz());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap**: Load files through a memory map
//! - **serde**: `Serialize`/`Deserialize` for the containers and JSON helpers

// Re-export core abstractions and format definitions
pub use spmat_core::{
    decode, encode, Axis, CoordinateStore, DataType, ErrorCategory, MatrixElement,
    MatrixOperations, SparseGraph, SparseMatrix, SparseView, SpmatError, TextHeader,
};

pub mod error;
pub mod file_io;
#[cfg(feature = "serde")]
pub mod json;
pub mod parallel;

pub use error::{Error, Result};
pub use file_io::{Persist, SaveOptions, SpmatFile};
pub use parallel::par_multiply;
