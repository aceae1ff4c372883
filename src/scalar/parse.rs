//! Parsing of user-typed rational numbers
//!
//! Accepted forms: integers (`-3`), decimals (`0.25`, `.5`), and a single
//! fraction of two such numbers (`1/2`, `-3/4`, `1.5/2`). Each side may carry
//! a leading sign. Anything else is rejected; input is never evaluated.

use super::Rational;
use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_traits::Zero;

/// Parse a number typed by the user into an exact rational
///
/// # Errors
///
/// Returns `Error::MalformedInput` when the text is not a number in one of
/// the accepted forms, or when the denominator is zero.
///
/// # Examples
///
/// ```
/// use lingame::scalar::{parse_rational, ratio};
///
/// assert_eq!(parse_rational("1/2").unwrap(), ratio(1, 2).unwrap());
/// assert_eq!(parse_rational("-0.75").unwrap(), ratio(-3, 4).unwrap());
/// assert!(parse_rational("2**10").is_err());
/// ```
pub fn parse_rational(input: &str) -> Result<Rational> {
    let text = input.trim();
    if text.is_empty() {
        return Err(Error::malformed(input, "expected a number"));
    }

    let (numer, denom) = match text.split_once('/') {
        Some((numer, denom)) => (numer, Some(denom)),
        None => (text, None),
    };

    let mut value = parse_decimal(numer).ok_or_else(|| {
        Error::malformed(input, "expected an integer, a decimal or a fraction like 1/2")
    })?;

    if let Some(denom) = denom {
        let denom = parse_decimal(denom).ok_or_else(|| {
            Error::malformed(input, "expected an integer, a decimal or a fraction like 1/2")
        })?;
        if denom.is_zero() {
            return Err(Error::malformed(input, "division by zero"));
        }
        value /= denom;
    }

    Ok(value)
}

fn parse_decimal(text: &str) -> Option<Rational> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(int_part) || !is_digits(frac_part) {
        return None;
    }

    let numer: BigInt = format!("{int_part}{frac_part}").parse().ok()?;
    let denom = BigInt::from(10u32).pow(u32::try_from(frac_part.len()).ok()?);
    let value = Rational::new(numer, denom);
    Some(if negative { -value } else { value })
}
