//! Exact matrix algorithms
//!
//! Everything here works on [`Matrix`](crate::matrix::Matrix) values over
//! exact rationals and returns new values instead of mutating its inputs.
//!
//! # Module Structure
//!
//! - `helpers`: shape and index validation shared by the algorithms
//! - `row_ops`: elementary row operations and the augmented pair they act on
//! - `determinant`: closed forms for n ≤ 3, cofactor expansion above
//! - `inverse`: adjugate inverse and the identity-product check
//! - `rref`: reduced row-echelon form validation
//! - `random`: random matrix generation behind the [`MatrixSource`] seam

pub mod determinant;
pub mod helpers;
pub mod inverse;
pub mod random;
pub mod row_ops;
pub mod rref;

pub use determinant::{cofactor, determinant};
pub use helpers::{validate_row_index, validate_size, validate_square_matrix};
pub use inverse::{adjugate, inverse, product_is_identity};
pub use random::{random_matrix, MatrixSource, RandomMatrices};
pub use row_ops::{apply_row_operation, AugmentedPair, RowOperation};
pub use rref::{is_reduced_row_echelon_form, RrefValidator, DEFAULT_TOLERANCE};
