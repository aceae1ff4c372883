//! # lingame
//!
//! **Exact-rational matrix drills with verified answers.**
//!
//! lingame is the core of a three-level linear-algebra game: type the
//! transpose of a matrix, reduce a matrix to reduced row-echelon form, and
//! compute an inverse by reducing `[A | I]` to `[I | A⁻¹]`. Every entry is an
//! exact rational, so answers are checked by exact comparison.
//!
//! ## Features
//!
//! - **Matrices**: exact rational entries, transpose, multiplication, text rendering
//! - **Row operations**: swap, scale, add-scaled, applied as values to a matrix and its companion
//! - **Determinant and inverse**: closed forms for small sizes, cofactor expansion and adjugate above
//! - **RREF validation**: configurable tolerance and zero-row rule
//! - **Levels**: unlock gating and answer checking through [`game::LevelController`]
//!
//! ## Quick Start
//!
//! ```rust
//! use lingame::prelude::*;
//!
//! let a = Matrix::from_i64_rows(&[[1, 2], [3, 4]])?;
//! assert_eq!(determinant(&a)?, from_int(-2));
//!
//! let inv = inverse(&a)?.expect("invertible");
//! assert!(product_is_identity(&a, &inv)?);
//! # Ok::<(), lingame::error::Error>(())
//! ```
//!
//! ## Module Structure
//!
//! - `scalar`: the exact [`Rational`](scalar::Rational) type and its input grammar
//! - `matrix`: the [`Matrix`](matrix::Matrix) value, parsing and rendering
//! - `algorithm`: row operations, determinant, inverse, RREF check, random generation
//! - `game`: levels, session state and the level controller
//! - `config`: TOML game configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod config;
pub mod error;
pub mod game;
pub mod matrix;
pub mod scalar;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::{
        apply_row_operation, determinant, inverse, is_reduced_row_echelon_form,
        product_is_identity, random_matrix, AugmentedPair, MatrixSource, RandomMatrices,
        RowOperation, RrefValidator,
    };
    pub use crate::config::GameConfig;
    pub use crate::error::{Error, Result};
    pub use crate::game::{Attempt, CommandKind, Level, LevelController, LevelState, Verdict};
    pub use crate::matrix::{parse_matrix, render_augmented, Matrix};
    pub use crate::scalar::{from_int, parse_rational, Rational};
}
