//! Outcomes of finishing a level

use super::level::{Level, LevelState};
use std::fmt;

/// Why an answer was judged incorrect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// The typed matrix differs from the transpose
    NotTranspose,
    /// The working matrix is not in reduced row-echelon form
    NotReduced,
    /// Level 3: the left block is not the identity
    LeftNotIdentity,
    /// Level 3: original times the right block is not the identity
    ProductNotIdentity,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mismatch::NotTranspose => "The matrix entered is not the correct transpose.",
            Mismatch::NotReduced => "The matrix is not in reduced row-echelon form.",
            Mismatch::LeftNotIdentity => "The left matrix must be the identity matrix.",
            Mismatch::ProductNotIdentity => {
                "The right matrix is not the inverse of the original matrix."
            }
        })
    }
}

/// Result of checking an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The level was completed
    Correct(Level),
    /// The answer was wrong; the level stays active
    Incorrect(Mismatch),
}

impl Verdict {
    /// Whether the answer passed
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct(_))
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct(Level::Inverse) => {
                f.write_str("Correct! You computed the inverse matrix. Game complete.")
            }
            Verdict::Correct(level) => write!(f, "Correct! You completed {level}."),
            Verdict::Incorrect(mismatch) => write!(f, "Incorrect. {mismatch}"),
        }
    }
}

/// The state after an answer was checked, and the verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// Next session state: the menu on success, unchanged on failure
    pub state: LevelState,
    /// The verdict
    pub verdict: Verdict,
}

impl Attempt {
    /// Whether the answer passed
    pub fn passed(&self) -> bool {
        self.verdict.is_correct()
    }

    /// Message for display
    pub fn message(&self) -> String {
        self.verdict.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_messages() {
        assert_eq!(
            Verdict::Correct(Level::Transpose).to_string(),
            "Correct! You completed Level 1 (Transpose)."
        );
        assert_eq!(
            Verdict::Incorrect(Mismatch::NotReduced).to_string(),
            "Incorrect. The matrix is not in reduced row-echelon form."
        );
        assert!(Verdict::Correct(Level::Inverse).to_string().contains("Game complete"));
    }
}
