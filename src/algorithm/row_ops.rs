//! Elementary row operations
//!
//! Operations are values: [`RowOperation::apply`] and [`apply_row_operation`]
//! return new matrices and leave their inputs untouched. When a companion
//! matrix is supplied it receives the identical operation (same rows, same
//! factor), which is what keeps an [`AugmentedPair`] consistent.

use super::helpers::validate_row_index;
use crate::error::{Error, Result};
use crate::matrix::{render_augmented, Matrix};
use crate::scalar::Rational;
use num_traits::{One, Zero};
use std::fmt;

/// One elementary row operation
///
/// Row indices are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowOperation {
    /// Exchange rows `first` and `second`
    Swap {
        /// First row
        first: usize,
        /// Second row
        second: usize,
    },

    /// Multiply every entry of `row` by a non-zero `factor`
    Scale {
        /// Row to scale
        row: usize,
        /// Multiplier, must be non-zero
        factor: Rational,
    },

    /// `row[target] += factor * row[source]`
    AddScaled {
        /// Row read from (unchanged)
        source: usize,
        /// Row written to
        target: usize,
        /// Multiplier applied to the source row
        factor: Rational,
    },
}

impl RowOperation {
    /// Check the operation against a matrix with `rows` rows
    ///
    /// # Errors
    ///
    /// - `Error::InvalidIndex` if any row index is outside `[0, rows)`
    /// - `Error::InvalidFactor` if a scale factor is zero
    /// - `Error::InvalidArgument` if an add-scaled operation targets its own source row
    pub fn validate(&self, rows: usize) -> Result<()> {
        match self {
            RowOperation::Swap { first, second } => {
                validate_row_index(*first, rows)?;
                validate_row_index(*second, rows)?;
            }
            RowOperation::Scale { row, factor } => {
                validate_row_index(*row, rows)?;
                if factor.is_zero() {
                    return Err(Error::invalid_factor(
                        factor,
                        "scaling a row by zero is not reversible",
                    ));
                }
            }
            RowOperation::AddScaled {
                source, target, ..
            } => {
                validate_row_index(*source, rows)?;
                validate_row_index(*target, rows)?;
                if source == target {
                    return Err(Error::invalid_argument(
                        "target",
                        "target row must differ from the source row",
                    ));
                }
            }
        }
        Ok(())
    }

    /// The operation that undoes this one
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFactor` for a scale by zero, which has no inverse.
    pub fn inverse(&self) -> Result<RowOperation> {
        Ok(match self {
            RowOperation::Swap { .. } => self.clone(),
            RowOperation::Scale { row, factor } => {
                if factor.is_zero() {
                    return Err(Error::invalid_factor(
                        factor,
                        "scaling a row by zero is not reversible",
                    ));
                }
                RowOperation::Scale {
                    row: *row,
                    factor: factor.recip(),
                }
            }
            RowOperation::AddScaled {
                source,
                target,
                factor,
            } => RowOperation::AddScaled {
                source: *source,
                target: *target,
                factor: -factor,
            },
        })
    }

    /// Apply to a single matrix, returning the result
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn apply(&self, a: &Matrix) -> Result<Matrix> {
        self.validate(a.rows())?;
        let mut out = a.clone();
        self.apply_unchecked(&mut out);
        Ok(out)
    }

    fn apply_unchecked(&self, m: &mut Matrix) {
        match self {
            RowOperation::Swap { first, second } => m.swap_rows(*first, *second),
            RowOperation::Scale { row, factor } => {
                if factor.is_one() {
                    return;
                }
                for v in m.row_mut(*row) {
                    *v *= factor;
                }
            }
            RowOperation::AddScaled {
                source,
                target,
                factor,
            } => {
                let scaled: Vec<Rational> = m.row(*source).iter().map(|v| v * factor).collect();
                for (v, s) in m.row_mut(*target).iter_mut().zip(scaled) {
                    *v += s;
                }
            }
        }
    }
}

impl fmt::Display for RowOperation {
    /// Rows render 1-based, as a user reads them
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOperation::Swap { first, second } => {
                write!(f, "R{} <-> R{}", first + 1, second + 1)
            }
            RowOperation::Scale { row, factor } => {
                write!(f, "R{} <- ({factor}) * R{}", row + 1, row + 1)
            }
            RowOperation::AddScaled {
                source,
                target,
                factor,
            } => write!(
                f,
                "R{} <- R{} + ({factor}) * R{}",
                target + 1,
                target + 1,
                source + 1
            ),
        }
    }
}

/// Apply `op` to `a` and, if present, identically to `b`
///
/// # Errors
///
/// - `Error::DimensionMismatch` if `b` has a different row count from `a`
/// - any error from [`RowOperation::validate`]
pub fn apply_row_operation(
    a: &Matrix,
    op: &RowOperation,
    b: Option<&Matrix>,
) -> Result<(Matrix, Option<Matrix>)> {
    if let Some(b) = b {
        if b.rows() != a.rows() {
            return Err(Error::dimension_mismatch(
                "apply_row_operation",
                a.shape(),
                b.shape(),
            ));
        }
    }
    op.validate(a.rows())?;

    let mut a_out = a.clone();
    op.apply_unchecked(&mut a_out);
    let b_out = b.map(|b| {
        let mut b_out = b.clone();
        op.apply_unchecked(&mut b_out);
        b_out
    });
    Ok((a_out, b_out))
}

/// A working matrix and the companion that mirrors its row operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedPair {
    working: Matrix,
    transform: Matrix,
}

impl AugmentedPair {
    /// Pair two matrices with the same row count
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if the row counts differ.
    pub fn new(working: Matrix, transform: Matrix) -> Result<Self> {
        if working.rows() != transform.rows() {
            return Err(Error::dimension_mismatch(
                "augmented pair",
                working.shape(),
                transform.shape(),
            ));
        }
        Ok(Self { working, transform })
    }

    /// Pair a square matrix with the identity of its size
    pub fn with_identity(working: Matrix) -> Result<Self> {
        let n = working.rows();
        Self::new(working, Matrix::identity(n))
    }

    /// The left (working) block
    pub fn working(&self) -> &Matrix {
        &self.working
    }

    /// The right (companion) block
    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// Apply an operation to both blocks
    ///
    /// # Errors
    ///
    /// See [`RowOperation::validate`].
    pub fn apply(&self, op: &RowOperation) -> Result<Self> {
        let (working, transform) = apply_row_operation(&self.working, op, Some(&self.transform))?;
        Ok(Self {
            working,
            transform: transform.unwrap_or_else(|| self.transform.clone()),
        })
    }

    /// `working | transform` as text
    pub fn render(&self) -> String {
        render_augmented(&self.working, &self.transform)
    }

    /// Split back into `(working, transform)`
    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.working, self.transform)
    }
}
