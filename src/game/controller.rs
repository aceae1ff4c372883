//! Level controller
//!
//! The controller owns the configuration, the matrix source and the RREF
//! validator. Session state lives in [`LevelState`] values the caller threads
//! through; every transition takes the current state by reference and returns
//! the next one, so a rejected command leaves the caller's state untouched.

use super::command::{parse_row_command, CommandKind};
use super::level::{Level, LevelState, Stage, GAME_COMPLETE};
use super::verdict::{Attempt, Mismatch, Verdict};
use crate::algorithm::{
    determinant, inverse, product_is_identity, validate_size, AugmentedPair, MatrixSource,
    RandomMatrices, RowOperation, RrefValidator,
};
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use num_traits::Zero;
use rand::rngs::ThreadRng;
use tracing::{debug, info, warn};

/// Drives the three levels
#[derive(Debug)]
pub struct LevelController<S = RandomMatrices<ThreadRng>> {
    config: GameConfig,
    source: S,
    validator: RrefValidator,
}

impl LevelController {
    /// Controller drawing matrices from the thread-local RNG
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the configured entry range is
    /// empty or the tolerance is negative or not finite.
    pub fn new(config: GameConfig) -> Result<Self> {
        let source = RandomMatrices::thread_local(config.entry_low, config.entry_high)?;
        Self::with_source(config, source)
    }
}

impl<S: MatrixSource> LevelController<S> {
    /// Controller drawing matrices from `source`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the configured tolerance is
    /// negative or not finite.
    pub fn with_source(config: GameConfig, source: S) -> Result<Self> {
        let validator = RrefValidator::with_tolerance(config.tolerance)?.strict(config.strict_rref);
        Ok(Self {
            config,
            source,
            validator,
        })
    }

    /// The active configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The RREF validator used to judge level 2
    pub fn validator(&self) -> &RrefValidator {
        &self.validator
    }

    /// A fresh session at the menu with nothing unlocked
    pub fn new_session(&self) -> LevelState {
        LevelState::default()
    }

    /// A random n×n matrix
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidSize` if `n` is outside the configured range.
    pub fn request_matrix(&mut self, n: usize) -> Result<Matrix> {
        validate_size(n, self.config.min_size, self.config.max_size)?;
        Ok(self.source.random_matrix(n))
    }

    /// Enter `level` with an n×n matrix
    ///
    /// # Errors
    ///
    /// - `Error::LevelLocked` if the previous level has not been completed
    /// - `Error::InvalidSize` if `n` is outside the configured range
    /// - `Error::NoInvertibleMatrix` if level 3 could not draw an invertible matrix
    pub fn enter_level(&mut self, state: &LevelState, level: Level, n: usize) -> Result<LevelState> {
        if !state.can_enter(level) {
            return Err(Error::LevelLocked {
                level,
                required: level.required_progress(),
            });
        }
        validate_size(n, self.config.min_size, self.config.max_size)?;

        let stage = match level {
            Level::Transpose => Stage::Transpose {
                matrix: self.source.random_matrix(n),
            },
            Level::GaussJordan => {
                let working = self.source.random_matrix(n);
                let companion = self.source.random_block(n, self.config.augment_columns);
                Stage::GaussJordan {
                    pair: AugmentedPair::new(working, companion)?,
                }
            }
            Level::Inverse => {
                let original = self.invertible_matrix(n)?;
                Stage::Inverse {
                    pair: AugmentedPair::with_identity(original.clone())?,
                    original,
                }
            }
        };

        info!(%level, size = n, unlocked = state.unlocked, "Entered level");
        Ok(state.with_stage(stage))
    }

    fn invertible_matrix(&mut self, n: usize) -> Result<Matrix> {
        let attempts = self.config.invertible_attempts;
        for attempt in 1..=attempts {
            let candidate = self.source.random_matrix(n);
            if !determinant(&candidate)?.is_zero() {
                return Ok(candidate);
            }
            warn!(attempt, attempts, size = n, "Drew a singular matrix, retrying");
        }
        Err(Error::NoInvertibleMatrix { attempts })
    }

    /// Apply a row operation to the active level 2 or level 3 matrices
    ///
    /// # Errors
    ///
    /// - `Error::NoActiveLevel` outside levels 2 and 3
    /// - any error from [`RowOperation::validate`]
    pub fn apply_operation(&self, state: &LevelState, op: &RowOperation) -> Result<LevelState> {
        let stage = match &state.stage {
            Stage::GaussJordan { pair } => Stage::GaussJordan {
                pair: pair.apply(op)?,
            },
            Stage::Inverse { original, pair } => Stage::Inverse {
                original: original.clone(),
                pair: pair.apply(op)?,
            },
            Stage::Menu | Stage::Transpose { .. } => {
                return Err(Error::NoActiveLevel {
                    action: "row operation",
                    expected: Level::GaussJordan,
                })
            }
        };
        debug!(%op, "Applied row operation");
        Ok(state.with_stage(stage))
    }

    /// Parse a free-text row command and apply it
    ///
    /// # Errors
    ///
    /// Any error from [`parse_row_command`] or [`apply_operation`](Self::apply_operation).
    pub fn apply_command(
        &self,
        state: &LevelState,
        kind: CommandKind,
        input: &str,
    ) -> Result<LevelState> {
        let rows = state
            .current_pair()
            .map(|pair| pair.working().rows())
            .ok_or(Error::NoActiveLevel {
                action: "row operation",
                expected: Level::GaussJordan,
            })?;
        let op = parse_row_command(kind, input, rows)?;
        self.apply_operation(state, &op)
    }

    /// Judge a typed transpose
    ///
    /// # Errors
    ///
    /// - `Error::NoActiveLevel` outside level 1
    /// - `Error::DimensionMismatch` if `answer` has the wrong shape
    pub fn check_transpose(&self, state: &LevelState, answer: &Matrix) -> Result<Attempt> {
        let Stage::Transpose { matrix } = &state.stage else {
            return Err(Error::NoActiveLevel {
                action: "check transpose",
                expected: Level::Transpose,
            });
        };
        let expected = matrix.transpose();
        if answer.shape() != expected.shape() {
            return Err(Error::dimension_mismatch(
                "check_transpose",
                expected.shape(),
                answer.shape(),
            ));
        }

        if *answer == expected {
            Ok(self.pass(state, Level::Transpose))
        } else {
            Ok(fail(state, Mismatch::NotTranspose))
        }
    }

    /// Judge the level 2 working matrix
    ///
    /// Only the working block is checked; the companion column is ignored.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveLevel` outside level 2.
    pub fn finish_gauss_jordan(&self, state: &LevelState) -> Result<Attempt> {
        let Stage::GaussJordan { pair } = &state.stage else {
            return Err(Error::NoActiveLevel {
                action: "finish",
                expected: Level::GaussJordan,
            });
        };
        if self.validator.check(pair.working()) {
            Ok(self.pass(state, Level::GaussJordan))
        } else {
            Ok(fail(state, Mismatch::NotReduced))
        }
    }

    /// Judge the level 3 pair
    ///
    /// The left block must be exactly the identity and the original matrix
    /// times the right block must be exactly the identity.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveLevel` outside level 3.
    pub fn finish_inverse(&self, state: &LevelState) -> Result<Attempt> {
        let Stage::Inverse { original, pair } = &state.stage else {
            return Err(Error::NoActiveLevel {
                action: "finish",
                expected: Level::Inverse,
            });
        };
        if !pair.working().is_identity() {
            return Ok(fail(state, Mismatch::LeftNotIdentity));
        }
        if !product_is_identity(original, pair.transform())? {
            return Ok(fail(state, Mismatch::ProductNotIdentity));
        }
        Ok(self.pass(state, Level::Inverse))
    }

    /// The transpose of the level 1 matrix
    ///
    /// # Errors
    ///
    /// Returns `Error::NoActiveLevel` outside level 1.
    pub fn reveal_transpose(&self, state: &LevelState) -> Result<Matrix> {
        match &state.stage {
            Stage::Transpose { matrix } => Ok(matrix.transpose()),
            _ => Err(Error::NoActiveLevel {
                action: "reveal transpose",
                expected: Level::Transpose,
            }),
        }
    }

    /// The exact inverse of the level 3 original matrix
    ///
    /// # Errors
    ///
    /// - `Error::NoActiveLevel` outside level 3
    /// - `Error::SingularMatrix` if the matrix has no inverse
    pub fn reveal_inverse(&self, state: &LevelState) -> Result<Matrix> {
        let Stage::Inverse { original, .. } = &state.stage else {
            return Err(Error::NoActiveLevel {
                action: "reveal inverse",
                expected: Level::Inverse,
            });
        };
        inverse(original)?.ok_or(Error::SingularMatrix)
    }

    /// Leave the active level, keeping progress
    pub fn exit(&self, state: &LevelState) -> LevelState {
        if let Some(level) = state.active_level() {
            debug!(%level, "Exited level");
        }
        LevelState::at_menu(state.unlocked)
    }

    /// Back to the menu with nothing unlocked
    pub fn reset_progress(&self, state: &LevelState) -> LevelState {
        info!(previous = state.unlocked, "Progress reset");
        LevelState::at_menu(0)
    }

    fn pass(&self, state: &LevelState, level: Level) -> Attempt {
        let unlocked = state.unlocked.max(level.number());
        info!(%level, unlocked, "Level passed");
        if unlocked >= GAME_COMPLETE && state.unlocked < GAME_COMPLETE {
            info!("All levels complete");
        }
        Attempt {
            state: LevelState::at_menu(unlocked),
            verdict: Verdict::Correct(level),
        }
    }
}

fn fail(state: &LevelState, mismatch: Mismatch) -> Attempt {
    debug!(%mismatch, "Answer rejected");
    Attempt {
        state: state.clone(),
        verdict: Verdict::Incorrect(mismatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::RandomMatrices;
    use rand::rngs::StdRng;

    fn controller() -> LevelController<RandomMatrices<StdRng>> {
        let config = GameConfig::default();
        let source = RandomMatrices::seeded(7, config.entry_low, config.entry_high).unwrap();
        LevelController::with_source(config, source).unwrap()
    }

    #[test]
    fn test_default_config_uses_exact_tolerance() {
        let ctl = controller();
        assert_eq!(ctl.validator(), &RrefValidator::default());
        assert_eq!(
            ctl.validator().tolerance(),
            &crate::scalar::ratio(1, 1_000_000_000).unwrap()
        );
    }

    #[test]
    fn test_request_matrix_size_bounds() {
        let mut ctl = controller();
        assert_eq!(ctl.request_matrix(3).unwrap().shape(), (3, 3));
        assert!(matches!(ctl.request_matrix(1), Err(Error::InvalidSize { .. })));
        assert!(matches!(ctl.request_matrix(6), Err(Error::InvalidSize { .. })));
    }

    #[test]
    fn test_locked_levels() {
        let mut ctl = controller();
        let state = ctl.new_session();
        assert_eq!(
            ctl.enter_level(&state, Level::Inverse, 3),
            Err(Error::LevelLocked {
                level: Level::Inverse,
                required: 2
            })
        );
        assert!(matches!(
            ctl.enter_level(&state, Level::GaussJordan, 3),
            Err(Error::LevelLocked { required: 1, .. })
        ));
    }

    #[test]
    fn test_transpose_pass_unlocks_level_two() {
        let mut ctl = controller();
        let state = ctl.enter_level(&ctl.new_session(), Level::Transpose, 3).unwrap();
        let answer = ctl.reveal_transpose(&state).unwrap();
        let attempt = ctl.check_transpose(&state, &answer).unwrap();
        assert!(attempt.passed());
        assert_eq!(attempt.state.unlocked(), 1);
        assert_eq!(attempt.state.active_level(), None);
    }

    #[test]
    fn test_level_two_companion_shape() {
        let mut ctl = controller();
        let state = LevelState::at_menu(1);
        let state = ctl.enter_level(&state, Level::GaussJordan, 4).unwrap();
        let pair = state.current_pair().unwrap();
        assert_eq!(pair.working().shape(), (4, 4));
        assert_eq!(pair.transform().shape(), (4, 1));
    }

    #[test]
    fn test_row_operation_outside_level() {
        let ctl = controller();
        let state = ctl.new_session();
        let op = RowOperation::Swap {
            first: 0,
            second: 1,
        };
        assert!(matches!(
            ctl.apply_operation(&state, &op),
            Err(Error::NoActiveLevel { .. })
        ));
    }

    #[test]
    fn test_rejected_operation_leaves_state() {
        let mut ctl = controller();
        let state = ctl
            .enter_level(&LevelState::at_menu(1), Level::GaussJordan, 2)
            .unwrap();
        let before = state.clone();
        assert!(ctl.apply_command(&state, CommandKind::Scale, "1 0").is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_exit_keeps_progress() {
        let mut ctl = controller();
        let state = ctl
            .enter_level(&LevelState::at_menu(2), Level::Inverse, 2)
            .unwrap();
        let state = ctl.exit(&state);
        assert_eq!(state.unlocked(), 2);
        assert!(state.active_level().is_none());
        assert_eq!(ctl.reset_progress(&state).unlocked(), 0);
    }
}
