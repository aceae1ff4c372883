//! Levels and per-session state

use crate::algorithm::AugmentedPair;
use crate::matrix::Matrix;
use std::fmt;

/// Progress value once every level has been completed
pub const GAME_COMPLETE: u8 = 3;

/// The three levels, in unlock order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// Level 1: type the transpose
    Transpose,
    /// Level 2: reduce to reduced row-echelon form
    GaussJordan,
    /// Level 3: reduce `[A | I]` to `[I | A⁻¹]`
    Inverse,
}

impl Level {
    /// All levels in order
    pub const ALL: [Level; 3] = [Level::Transpose, Level::GaussJordan, Level::Inverse];

    /// 1-based level number
    pub const fn number(self) -> u8 {
        match self {
            Level::Transpose => 1,
            Level::GaussJordan => 2,
            Level::Inverse => 3,
        }
    }

    /// Progress needed before this level can be entered
    pub const fn required_progress(self) -> u8 {
        self.number() - 1
    }

    /// Level from its 1-based number
    pub fn from_number(number: u8) -> Option<Level> {
        Level::ALL.into_iter().find(|level| level.number() == number)
    }

    /// Short name
    pub const fn name(self) -> &'static str {
        match self {
            Level::Transpose => "Transpose",
            Level::GaussJordan => "Gauss-Jordan",
            Level::Inverse => "Inverse",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {} ({})", self.number(), self.name())
    }
}

/// What the session is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Level selection
    Menu,
    /// Level 1 with the matrix to transpose
    Transpose {
        /// The matrix shown to the user
        matrix: Matrix,
    },
    /// Level 2 with the working matrix and its random companion block
    GaussJordan {
        /// Working matrix and companion
        pair: AugmentedPair,
    },
    /// Level 3 with the original matrix and the `[working | transform]` pair
    Inverse {
        /// The matrix as generated, used to verify the answer
        original: Matrix,
        /// Working matrix (starts as `original`) and transform (starts as identity)
        pair: AugmentedPair,
    },
}

/// Session state threaded through the level controller
///
/// `unlocked` only ever grows, except through an explicit progress reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelState {
    pub(crate) unlocked: u8,
    pub(crate) stage: Stage,
}

impl Default for LevelState {
    fn default() -> Self {
        Self {
            unlocked: 0,
            stage: Stage::Menu,
        }
    }
}

impl LevelState {
    /// Number of completed levels (0..=3)
    pub fn unlocked(&self) -> u8 {
        self.unlocked
    }

    /// Whether every level has been completed
    pub fn is_complete(&self) -> bool {
        self.unlocked >= GAME_COMPLETE
    }

    /// Whether `level` may be entered
    pub fn can_enter(&self, level: Level) -> bool {
        self.unlocked >= level.required_progress()
    }

    /// The current stage
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The active level, or `None` at the menu
    pub fn active_level(&self) -> Option<Level> {
        match self.stage {
            Stage::Menu => None,
            Stage::Transpose { .. } => Some(Level::Transpose),
            Stage::GaussJordan { .. } => Some(Level::GaussJordan),
            Stage::Inverse { .. } => Some(Level::Inverse),
        }
    }

    /// The working matrix of the active level
    pub fn current_matrix(&self) -> Option<&Matrix> {
        match &self.stage {
            Stage::Menu => None,
            Stage::Transpose { matrix } => Some(matrix),
            Stage::GaussJordan { pair } | Stage::Inverse { pair, .. } => Some(pair.working()),
        }
    }

    /// The augmented pair of the active level, for levels 2 and 3
    pub fn current_pair(&self) -> Option<&AugmentedPair> {
        match &self.stage {
            Stage::GaussJordan { pair } | Stage::Inverse { pair, .. } => Some(pair),
            Stage::Menu | Stage::Transpose { .. } => None,
        }
    }

    /// What the active stage shows, as text
    pub fn render(&self) -> String {
        match &self.stage {
            Stage::Menu => Level::ALL
                .iter()
                .map(|level| {
                    let mark = if self.can_enter(*level) { "open" } else { "locked" };
                    format!("{level}: {mark}")
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Stage::Transpose { matrix } => matrix.to_string(),
            Stage::GaussJordan { pair } | Stage::Inverse { pair, .. } => pair.render(),
        }
    }

    pub(crate) fn at_menu(unlocked: u8) -> Self {
        Self {
            unlocked,
            stage: Stage::Menu,
        }
    }

    pub(crate) fn with_stage(&self, stage: Stage) -> Self {
        Self {
            unlocked: self.unlocked,
            stage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_numbers_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_number(level.number()), Some(level));
        }
        assert_eq!(Level::from_number(0), None);
        assert_eq!(Level::from_number(4), None);
    }

    #[test]
    fn test_required_progress() {
        assert_eq!(Level::Transpose.required_progress(), 0);
        assert_eq!(Level::GaussJordan.required_progress(), 1);
        assert_eq!(Level::Inverse.required_progress(), 2);
    }

    #[test]
    fn test_new_state_is_menu() {
        let state = LevelState::default();
        assert_eq!(state.unlocked(), 0);
        assert_eq!(state.active_level(), None);
        assert!(state.current_matrix().is_none());
        assert!(state.can_enter(Level::Transpose));
        assert!(!state.can_enter(Level::GaussJordan));
    }

    #[test]
    fn test_menu_render() {
        let state = LevelState::at_menu(1);
        assert_eq!(
            state.render(),
            "Level 1 (Transpose): open\nLevel 2 (Gauss-Jordan): open\nLevel 3 (Inverse): locked"
        );
    }
}
