// Numeric core of the calculator
//
// Two independent groups of pure functions:
//   - stats:  descriptive statistics and normalization over a slice of f64
//   - matrix: transpose and product over row-major nested vectors

// --- MODULE DECLARATIONS ---
pub mod error;
pub mod matrix;
pub mod stats;

// Re-export error types for public API
pub use error::{EngineError, EngineResult, Operand};

// Re-export the matrix types, which every caller needs
pub use matrix::{Matrix, Shape};

#[cfg(test)]
mod tests;
