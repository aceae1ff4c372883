//! Helper functions for matrix algorithms
//!
//! Validation utilities shared by the row operations, determinant and inverse.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Validate matrix is square, returning its side length
pub fn validate_square_matrix(a: &Matrix) -> Result<usize> {
    let (m, n) = a.shape();
    if m != n {
        return Err(Error::dimension_mismatch("square matrix", (m, m), (m, n)));
    }
    Ok(n)
}

/// Validate a requested matrix size lies in `[min, max]`
pub fn validate_size(size: usize, min: usize, max: usize) -> Result<usize> {
    if size < min || size > max {
        return Err(Error::InvalidSize { size, min, max });
    }
    Ok(size)
}

/// Validate a zero-based row index against a row count
pub fn validate_row_index(index: usize, rows: usize) -> Result<usize> {
    if index >= rows {
        return Err(Error::InvalidIndex {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            rows,
        });
    }
    Ok(index)
}
