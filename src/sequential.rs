//! Single-threaded reference multiplication.

use crate::error::{Error, Result};
use crate::matrix::{Element, Matrix};

/// Textbook i-j-k triple loop: `C[i][j] = sum over k of A[i][k] * B[k][j]`.
///
/// This is the oracle every parallel policy is checked against. Arithmetic is
/// checked, so an overflowing cell fails with [`Error::Overflow`] instead of
/// wrapping.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let dim = Matrix::product_dim(a, b)?;
    let inner = a.cols();
    let mut mat = Matrix::new(dim);
    for i in 0..dim.0 {
        for j in 0..dim.1 {
            let mut sum: Element = 0;
            for k in 0..inner {
                sum = a
                    .get(i, k)
                    .checked_mul(b.get(k, j))
                    .and_then(|prod| sum.checked_add(prod))
                    .ok_or(Error::Overflow { row: i, col: j })?;
            }
            mat.set(i, j, sum);
        }
    }
    Ok(mat)
}
