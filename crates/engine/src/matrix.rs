// Matrix operations (transpose, product)
//
// Matrices are plain row-major nested vectors. Inputs are borrowed and a
// new matrix is always returned.

use std::fmt;

use crate::error::{EngineError, EngineResult, Operand};

/// Row-major matrix: a list of rows of equal length
pub type Matrix = Vec<Vec<f64>>;

/// Rows x columns of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

/// Shape taken from the row count and the length of the first row
pub fn shape(matrix: &[Vec<f64>]) -> Shape {
    Shape {
        rows: matrix.len(),
        cols: matrix.first().map_or(0, Vec::len),
    }
}

/// Check that every row has the first row's length
fn ensure_rectangular(matrix: &[Vec<f64>], operand: Operand) -> EngineResult<Shape> {
    let shape = shape(matrix);

    if let Some((row, found)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != shape.cols)
    {
        return Err(EngineError::RaggedMatrix {
            operand,
            row: row + 1,
            expected: shape.cols,
            found,
        });
    }

    Ok(shape)
}

/// Flip a matrix over its diagonal: element `[i][j]` becomes `[j][i]`
pub fn transpose(matrix: &[Vec<f64>]) -> EngineResult<Matrix> {
    if matrix.is_empty() {
        return Err(EngineError::EmptyMatrix {
            operation: "transpose",
        });
    }

    let Shape { rows, cols } = ensure_rectangular(matrix, Operand::Single)?;

    Ok((0..cols)
        .map(|j| (0..rows).map(|i| matrix[i][j]).collect())
        .collect())
}

/// Standard matrix multiplication `A x B`.
///
/// The column count of `a` must equal the row count of `b`.
pub fn matrix_product(a: &[Vec<f64>], b: &[Vec<f64>]) -> EngineResult<Matrix> {
    if a.is_empty() || b.is_empty() {
        return Err(EngineError::EmptyMatrix {
            operation: "multiply",
        });
    }

    let left = ensure_rectangular(a, Operand::Left)?;
    let right = ensure_rectangular(b, Operand::Right)?;

    if left.cols != right.rows {
        return Err(EngineError::ShapeMismatch { left, right });
    }

    let mut result = vec![vec![0.0; right.cols]; left.rows];
    for (i, out_row) in result.iter_mut().enumerate() {
        for (k, &a_ik) in a[i].iter().enumerate() {
            for (j, out) in out_row.iter_mut().enumerate() {
                *out += a_ik * b[k][j];
            }
        }
    }

    Ok(result)
}

/// `n x n` identity matrix
pub fn identity(n: usize) -> EngineResult<Matrix> {
    if n == 0 {
        return Err(EngineError::EmptyMatrix {
            operation: "build",
        });
    }

    Ok((0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect())
}
