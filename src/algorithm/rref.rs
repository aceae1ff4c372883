//! Reduced row-echelon form validation
//!
//! Rows are scanned top to bottom tracking the last pivot column. A row's
//! pivot is its first entry that is non-zero beyond the tolerance. Each pivot
//! must sit strictly right of the previous one, equal 1 within tolerance, and
//! be the only non-zero entry of its column.
//!
//! Zero rows are skipped without moving the last pivot column. By default a
//! zero row may appear between non-zero rows and the matrix still passes;
//! [`RrefValidator::strict`] additionally requires every zero row to come
//! after all non-zero rows.
//!
//! Only the working block is checked. Callers holding an augmented matrix pass
//! the left block alone.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::scalar::{is_one_within, is_zero_within, tolerance_from_f64, Rational};
use num_bigint::BigInt;

/// Tolerance used when none is configured
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Reduced row-echelon form checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RrefValidator {
    tolerance: Rational,
    strict_zero_rows: bool,
}

fn default_tolerance() -> Rational {
    Rational::new(BigInt::from(1), BigInt::from(1_000_000_000))
}

impl Default for RrefValidator {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            strict_zero_rows: false,
        }
    }
}

impl RrefValidator {
    /// Validator with the given absolute tolerance
    ///
    /// [`DEFAULT_TOLERANCE`] maps to exactly 1/10⁹; any other value is
    /// converted to its exact binary fraction.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `tolerance` is negative or not finite.
    pub fn with_tolerance(tolerance: f64) -> Result<Self> {
        let tolerance = if tolerance == DEFAULT_TOLERANCE {
            default_tolerance()
        } else {
            tolerance_from_f64(tolerance)?
        };
        Ok(Self {
            tolerance,
            strict_zero_rows: false,
        })
    }

    /// Require zero rows to come after every non-zero row
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict_zero_rows = strict;
        self
    }

    /// The tolerance as an exact rational
    pub fn tolerance(&self) -> &Rational {
        &self.tolerance
    }

    /// Whether zero rows must sort last
    pub fn is_strict(&self) -> bool {
        self.strict_zero_rows
    }

    /// Whether `a` is in reduced row-echelon form
    pub fn check(&self, a: &Matrix) -> bool {
        let mut last_pivot: Option<usize> = None;
        let mut seen_zero_row = false;

        for i in 0..a.rows() {
            let row = a.row(i);
            let Some(pivot) = row.iter().position(|v| !is_zero_within(v, &self.tolerance)) else {
                seen_zero_row = true;
                continue;
            };

            if self.strict_zero_rows && seen_zero_row {
                return false;
            }
            if last_pivot.is_some_and(|last| pivot <= last) {
                return false;
            }
            if !is_one_within(&row[pivot], &self.tolerance) {
                return false;
            }
            let column_clear = (0..a.rows())
                .filter(|&k| k != i)
                .all(|k| is_zero_within(&a[(k, pivot)], &self.tolerance));
            if !column_clear {
                return false;
            }

            last_pivot = Some(pivot);
        }

        true
    }
}

/// Check reduced row-echelon form with [`DEFAULT_TOLERANCE`] and the relaxed zero-row rule
pub fn is_reduced_row_echelon_form(a: &Matrix) -> bool {
    RrefValidator::default().check(a)
}
