//! Exact inverse and inverse verification

use super::determinant::{cofactor_unchecked, determinant};
use super::helpers::validate_square_matrix;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use num_traits::Zero;

/// Adjugate: the transpose of the matrix of signed cofactors
///
/// # Errors
///
/// Returns `Error::DimensionMismatch` if `a` is not square.
pub fn adjugate(a: &Matrix) -> Result<Matrix> {
    let n = validate_square_matrix(a)?;
    if n == 1 {
        return Ok(Matrix::identity(1));
    }
    let mut data = Vec::with_capacity(n * n);
    // adj[i][j] = C[j][i]
    for i in 0..n {
        for j in 0..n {
            data.push(cofactor_unchecked(a, j, i));
        }
    }
    Matrix::from_vec(n, n, data)
}

/// Exact inverse, or `None` when the matrix is singular
///
/// For 2×2 the closed form `[[d, -b], [-c, a]] / det` is used; above that the
/// adjugate is divided entrywise by the determinant. Results stay exact.
///
/// # Errors
///
/// Returns `Error::DimensionMismatch` if `a` is not square.
pub fn inverse(a: &Matrix) -> Result<Option<Matrix>> {
    let n = validate_square_matrix(a)?;
    let det = determinant(a)?;
    if det.is_zero() {
        return Ok(None);
    }

    let adj = if n == 2 {
        Matrix::from_vec(
            2,
            2,
            vec![
                a[(1, 1)].clone(),
                -&a[(0, 1)],
                -&a[(1, 0)],
                a[(0, 0)].clone(),
            ],
        )?
    } else {
        adjugate(a)?
    };
    Ok(Some(adj.map(|v| v / &det)))
}

/// Whether `a @ b` is exactly the identity
///
/// This is the check every inverse verification goes through: it multiplies
/// instead of comparing `b` against a computed inverse.
///
/// # Errors
///
/// Returns `Error::DimensionMismatch` if the product is undefined or not square.
pub fn product_is_identity(a: &Matrix, b: &Matrix) -> Result<bool> {
    let product = a.matmul(b)?;
    if !product.is_square() {
        return Err(Error::dimension_mismatch(
            "product_is_identity",
            a.shape(),
            b.shape(),
        ));
    }
    Ok(product.is_identity())
}
