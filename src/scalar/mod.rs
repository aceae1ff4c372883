//! Exact rational scalars
//!
//! Every matrix entry is a [`Rational`]: an arbitrary-precision fraction kept in
//! lowest terms with a positive denominator. Nothing in the engine converts to
//! floating point, so chained row operations never drift.
//!
//! - `parse`: the constrained grammar for user-typed numbers ("3", "-1/2", "0.25")

mod parse;

pub use parse::parse_rational;

use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Exact rational number used for every matrix entry
pub type Rational = num_rational::BigRational;

/// Build a rational from an integer
#[inline]
pub fn from_int(value: i64) -> Rational {
    Rational::from_integer(BigInt::from(value))
}

/// Build `numer / denom` in lowest terms
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `denom` is zero.
pub fn ratio(numer: i64, denom: i64) -> Result<Rational> {
    if denom == 0 {
        return Err(Error::invalid_argument("denom", "denominator must be non-zero"));
    }
    Ok(Rational::new(BigInt::from(numer), BigInt::from(denom)))
}

/// Convert a floating-point tolerance to an exact rational
///
/// The conversion is exact (every finite `f64` is a dyadic rational), so
/// comparisons against the result stay in exact arithmetic.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` for NaN, infinite or negative values.
pub fn tolerance_from_f64(tolerance: f64) -> Result<Rational> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(Error::invalid_argument(
            "tolerance",
            format!("expected a finite non-negative value, got {tolerance}"),
        ));
    }
    Rational::from_float(tolerance).ok_or_else(|| {
        Error::invalid_argument("tolerance", format!("{tolerance} is not representable"))
    })
}

/// Whether `|value| <= tolerance`
#[inline]
pub fn is_zero_within(value: &Rational, tolerance: &Rational) -> bool {
    if tolerance.is_zero() {
        return value.is_zero();
    }
    value.abs() <= *tolerance
}

/// Whether `|value - 1| <= tolerance`
#[inline]
pub fn is_one_within(value: &Rational, tolerance: &Rational) -> bool {
    if tolerance.is_zero() {
        return value.is_one();
    }
    (value - Rational::one()).abs() <= *tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_reduces_to_lowest_terms() {
        let r = ratio(6, -4).unwrap();
        assert_eq!(r, ratio(-3, 2).unwrap());
        assert_eq!(r.to_string(), "-3/2");
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert!(matches!(ratio(1, 0), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_integer_displays_without_denominator() {
        assert_eq!(from_int(-3).to_string(), "-3");
        assert_eq!(from_int(0).to_string(), "0");
    }

    #[test]
    fn test_tolerance_from_f64() {
        let tol = tolerance_from_f64(1e-9).unwrap();
        assert!(tol > Rational::zero());
        assert!(tol < ratio(1, 100_000_000).unwrap());
        assert!(tolerance_from_f64(f64::NAN).is_err());
        assert!(tolerance_from_f64(-1.0).is_err());
        assert!(tolerance_from_f64(0.0).unwrap().is_zero());
    }

    #[test]
    fn test_within_tolerance() {
        let tol = tolerance_from_f64(1e-9).unwrap();
        let tiny = ratio(1, 10_000_000_000).unwrap();
        assert!(is_zero_within(&tiny, &tol));
        assert!(!is_zero_within(&ratio(1, 1000).unwrap(), &tol));
        assert!(is_one_within(&(from_int(1) + tiny.clone()), &tol));
        assert!(!is_one_within(&ratio(1, 2).unwrap(), &tol));

        let exact = Rational::zero();
        assert!(!is_zero_within(&tiny, &exact));
        assert!(is_one_within(&from_int(1), &exact));
    }
}
