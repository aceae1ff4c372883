//! Common test utilities
#![allow(dead_code)]

use lingame::algorithm::{MatrixSource, RandomMatrices};
use lingame::config::GameConfig;
use lingame::game::LevelController;
use lingame::matrix::Matrix;
use rand::rngs::StdRng;
use std::collections::VecDeque;

/// Build a matrix from integer rows
pub fn m(rows: &[&[i64]]) -> Matrix {
    Matrix::from_i64_rows(rows).unwrap()
}

/// Controller over a seeded generator with the default config
pub fn seeded_controller(seed: u64) -> LevelController<RandomMatrices<StdRng>> {
    let config = GameConfig::default();
    let source = RandomMatrices::seeded(seed, config.entry_low, config.entry_high).unwrap();
    LevelController::with_source(config, source).unwrap()
}

/// Controller that hands out `script` in order
pub fn scripted_controller(
    config: GameConfig,
    script: Vec<Matrix>,
) -> LevelController<ScriptedSource> {
    LevelController::with_source(config, ScriptedSource::new(script)).unwrap()
}

/// Matrix source replaying a fixed list of matrices
///
/// Panics when the script runs out or the next matrix has the wrong shape.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    script: VecDeque<Matrix>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Matrix>) -> Self {
        Self {
            script: script.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl MatrixSource for ScriptedSource {
    fn random_block(&mut self, rows: usize, cols: usize) -> Matrix {
        let next = self
            .script
            .pop_front()
            .expect("scripted source ran out of matrices");
        assert_eq!(next.shape(), (rows, cols), "scripted matrix has the wrong shape");
        next
    }
}
