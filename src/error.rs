//! Error types for lingame

use crate::game::Level;
use thiserror::Error;

/// Result type alias using lingame's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the matrix engine or the level controller.
///
/// Every variant is recoverable: a front-end reports the message and re-prompts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested matrix size outside the accepted range
    #[error("Invalid matrix size {size}: expected a value between {min} and {max}")]
    InvalidSize {
        /// The rejected size
        size: usize,
        /// Smallest accepted size
        min: usize,
        /// Largest accepted size
        max: usize,
    },

    /// Row index outside `[0, rows)`
    #[error("Row index {index} out of range for matrix with {rows} rows")]
    InvalidIndex {
        /// The zero-based index that was rejected (negative when typed as 0 or below)
        index: i64,
        /// Number of rows in the matrix
        rows: usize,
    },

    /// Scale factor that cannot be used in an elementary row operation
    #[error("Invalid factor '{factor}': {reason}")]
    InvalidFactor {
        /// The factor as given
        factor: String,
        /// Why it was rejected
        reason: String,
    },

    /// Free-text input that does not match the expected form
    #[error("Malformed input '{input}': {reason}")]
    MalformedInput {
        /// The offending input
        input: String,
        /// What was expected
        reason: String,
    },

    /// Attempt to enter a level that has not been unlocked yet
    #[error("{level} is locked: complete level {required} first")]
    LevelLocked {
        /// The level that was requested
        level: Level,
        /// The level number that must be completed first
        required: u8,
    },

    /// Inverse requested on a matrix with zero determinant
    #[error("Matrix is singular (determinant is 0) and has no inverse")]
    SingularMatrix,

    /// Operand shapes are incompatible for an operation
    #[error("Dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// The operation being attempted
        op: &'static str,
        /// Shape of the left operand as (rows, cols)
        lhs: (usize, usize),
        /// Shape of the right operand as (rows, cols)
        rhs: (usize, usize),
    },

    /// An in-level action was attempted while that level is not active
    #[error("'{action}' is not available: {expected} is not the active level")]
    NoActiveLevel {
        /// The attempted action
        action: &'static str,
        /// The level the action belongs to
        expected: Level,
    },

    /// No invertible matrix was drawn within the allowed attempts
    #[error("Could not generate an invertible matrix after {attempts} attempts")]
    NoInvertibleMatrix {
        /// Number of matrices drawn
        attempts: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a malformed input error
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid factor error
    pub fn invalid_factor(factor: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidFactor {
            factor: factor.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error from two `(rows, cols)` shapes
    pub fn dimension_mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }
}
