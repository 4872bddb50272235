// Error handling for the computation engine
//
// Every statistics and matrix function returns one of these instead of
// panicking, so the CLI can report the failure and pick an exit code.

use std::fmt;

use crate::matrix::Shape;

/// Which side of a binary matrix operation an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The only operand of a unary operation
    Single,
    Left,
    Right,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Single => write!(f, "matrix"),
            Operand::Left => write!(f, "matrix A"),
            Operand::Right => write!(f, "matrix B"),
        }
    }
}

/// Engine error types
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A statistic or normalization received no data
    EmptyInput { operation: &'static str },

    /// A matrix operation received a matrix with zero rows
    EmptyMatrix { operation: &'static str },

    /// Inner dimensions of a matrix product do not agree
    ShapeMismatch { left: Shape, right: Shape },

    /// A row's length differs from the first row's
    RaggedMatrix {
        operand: Operand,
        /// 1-based, as the CSV loader counts rows
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptyInput { operation } => {
                write!(f, "Cannot calculate {} of empty list", operation)
            }
            EngineError::EmptyMatrix { operation } => {
                write!(f, "Cannot {} an empty matrix", operation)
            }
            EngineError::ShapeMismatch { left, right } => {
                write!(
                    f,
                    "Shape mismatch for dot product: {} vs {}. Columns of A must match rows of B.",
                    left, right
                )
            }
            EngineError::RaggedMatrix {
                operand,
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {} of {} has {} element{}, expected {} (rows must all have the same length)",
                    row,
                    operand,
                    found,
                    if *found == 1 { "" } else { "s" },
                    expected
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Get the exit code for this error type
    /// Used by main.rs to return specific exit codes
    pub fn exit_code(&self) -> i32 {
        match self {
            EngineError::EmptyInput { .. } => 10,
            EngineError::EmptyMatrix { .. } => 11,
            EngineError::ShapeMismatch { .. } => 12,
            EngineError::RaggedMatrix { .. } => 13,
        }
    }
}

/// Convenient Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
