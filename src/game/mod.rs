//! The three-level game
//!
//! - `level`: [`Level`], [`Stage`] and the [`LevelState`] threaded through a session
//! - `command`: free-text row commands with 1-based rows
//! - `verdict`: [`Verdict`] and [`Attempt`] returned when an answer is checked
//! - `controller`: [`LevelController`], which drives the transitions

mod command;
mod controller;
mod level;
mod verdict;

pub use command::{parse_row_command, CommandKind};
pub use controller::LevelController;
pub use level::{Level, LevelState, Stage, GAME_COMPLETE};
pub use verdict::{Attempt, Mismatch, Verdict};
