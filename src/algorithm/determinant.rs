//! Exact determinants
//!
//! Matrices in the game are at most 5×5, so the determinant is computed
//! exactly at every size: closed forms up to 3×3 and cofactor expansion along
//! the first row above that. There is no floating-point path.

use super::helpers::validate_square_matrix;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::scalar::Rational;
use num_traits::{One, Zero};

/// Determinant of a square matrix
///
/// - n = 0: 1 (empty product)
/// - n = 1: the single entry
/// - n = 2: `ad - bc`
/// - n = 3: rule of Sarrus
/// - n ≥ 4: cofactor expansion along the first row
///
/// # Errors
///
/// Returns `Error::DimensionMismatch` if `a` is not square.
pub fn determinant(a: &Matrix) -> Result<Rational> {
    validate_square_matrix(a)?;
    Ok(determinant_unchecked(a))
}

/// Signed cofactor `(-1)^(row+col) * det(minor(row, col))`
///
/// # Errors
///
/// Returns `Error::DimensionMismatch` if `a` is not square.
///
/// # Panics
///
/// Panics if `row` or `col` is out of bounds.
pub fn cofactor(a: &Matrix, row: usize, col: usize) -> Result<Rational> {
    validate_square_matrix(a)?;
    Ok(cofactor_unchecked(a, row, col))
}

pub(crate) fn cofactor_unchecked(a: &Matrix, row: usize, col: usize) -> Rational {
    let minor_det = determinant_unchecked(&a.minor(row, col));
    if (row + col) % 2 == 0 {
        minor_det
    } else {
        -minor_det
    }
}

fn determinant_unchecked(a: &Matrix) -> Rational {
    match a.rows() {
        0 => Rational::one(),
        1 => a[(0, 0)].clone(),
        2 => &a[(0, 0)] * &a[(1, 1)] - &a[(0, 1)] * &a[(1, 0)],
        3 => sarrus(a),
        n => {
            let mut det = Rational::zero();
            for j in 0..n {
                if a[(0, j)].is_zero() {
                    continue;
                }
                det += &a[(0, j)] * cofactor_unchecked(a, 0, j);
            }
            det
        }
    }
}

fn sarrus(a: &Matrix) -> Rational {
    let (x00, x01, x02) = (&a[(0, 0)], &a[(0, 1)], &a[(0, 2)]);
    let (x10, x11, x12) = (&a[(1, 0)], &a[(1, 1)], &a[(1, 2)]);
    let (x20, x21, x22) = (&a[(2, 0)], &a[(2, 1)], &a[(2, 2)]);

    let forward = x00 * x11 * x22 + x01 * x12 * x20 + x02 * x10 * x21;
    let backward = x02 * x11 * x20 + x00 * x12 * x21 + x01 * x10 * x22;
    forward - backward
}
