//! # Primer Core Library
//!
//! Provides the dense matrix interface and its row-major storage.

pub mod error;
pub mod row_matrix;
pub mod storage;
pub mod traits;

// Re-export public types
pub use error::PrimerCoreError;
pub use row_matrix::RowMatrix;
pub use storage::MatrixStorage;
pub use traits::{Element, Matrix};
