//! `primer-ops`: matrix algebra over the row-major matrices of `primer-core`.
//!
//! Provides element-wise addition, matrix multiplication and a simplified
//! GEMM (`A * B + C`). Every operation consumes its inputs and returns a new
//! matrix, or `None` when the dimensions do not line up.

pub mod operations;

pub use operations::RowMatrixOperations;

// Re-export from primer_core
pub use primer_core::{Element, Matrix, MatrixStorage, PrimerCoreError, RowMatrix};
