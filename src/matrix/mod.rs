//! Matrix type and its text forms
//!
//! - `core`: the [`Matrix`] value type (construction, transpose, product, minors)
//! - `display`: simplified-fraction rendering, including `left | right` augmentation
//! - `parse`: reading a matrix typed row by row

mod core;
mod display;
mod parse;

pub use self::core::Matrix;
pub use display::{render_augmented, Cell, DIVIDER};
pub use parse::parse_matrix;
