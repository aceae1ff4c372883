//! Free-text row commands
//!
//! Rows are typed 1-based, as they are displayed, and converted to the
//! zero-based indices [`RowOperation`] uses.

use crate::algorithm::{validate_row_index, RowOperation};
use crate::error::{Error, Result};
use crate::scalar::parse_rational;
use num_bigint::BigInt;
use num_traits::Signed;

/// Which row operation a command line describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `"i j"`
    Swap,
    /// `"row factor"`
    Scale,
    /// `"source target factor"`
    AddScaled,
}

impl CommandKind {
    fn arity(self) -> usize {
        match self {
            CommandKind::Swap => 2,
            CommandKind::Scale => 2,
            CommandKind::AddScaled => 3,
        }
    }

    fn usage(self) -> &'static str {
        match self {
            CommandKind::Swap => "expected two row numbers, e.g. \"1 2\"",
            CommandKind::Scale => "expected a row number and a factor, e.g. \"1 1/2\"",
            CommandKind::AddScaled => {
                "expected source row, target row and factor, e.g. \"1 2 -3\""
            }
        }
    }
}

/// Parse the arguments of a row command for a matrix with `rows` rows
///
/// # Errors
///
/// - `Error::MalformedInput` for a wrong token count or a row that is not an integer
/// - `Error::InvalidIndex` for a row outside `1..=rows`
/// - `Error::InvalidFactor` for a factor that does not parse or is zero
/// - `Error::InvalidArgument` for add-scaled with equal source and target
pub fn parse_row_command(kind: CommandKind, input: &str, rows: usize) -> Result<RowOperation> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != kind.arity() {
        return Err(Error::malformed(input.trim(), kind.usage()));
    }

    let op = match kind {
        CommandKind::Swap => RowOperation::Swap {
            first: parse_row(tokens[0], rows)?,
            second: parse_row(tokens[1], rows)?,
        },
        CommandKind::Scale => RowOperation::Scale {
            row: parse_row(tokens[0], rows)?,
            factor: parse_factor(tokens[1])?,
        },
        CommandKind::AddScaled => RowOperation::AddScaled {
            source: parse_row(tokens[0], rows)?,
            target: parse_row(tokens[1], rows)?,
            factor: parse_factor(tokens[2])?,
        },
    };
    op.validate(rows)?;
    Ok(op)
}

fn parse_row(token: &str, rows: usize) -> Result<usize> {
    let is_integer = token
        .strip_prefix(['+', '-'])
        .unwrap_or(token)
        .bytes()
        .all(|b| b.is_ascii_digit());
    let typed: BigInt = token
        .parse()
        .ok()
        .filter(|_| is_integer)
        .ok_or_else(|| Error::malformed(token, "row numbers must be whole numbers"))?;

    let index: BigInt = typed - 1;
    match usize::try_from(&index) {
        Ok(index) => validate_row_index(index, rows),
        Err(_) => {
            let saturated = if index.is_negative() { i64::MIN } else { i64::MAX };
            Err(Error::InvalidIndex {
                index: i64::try_from(&index).unwrap_or(saturated),
                rows,
            })
        }
    }
}

fn parse_factor(token: &str) -> Result<crate::scalar::Rational> {
    parse_rational(token).map_err(|e| match e {
        Error::MalformedInput { reason, .. } => Error::invalid_factor(token, reason),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{from_int, ratio};

    #[test]
    fn test_swap_is_one_based() {
        let op = parse_row_command(CommandKind::Swap, "1 2", 2).unwrap();
        assert_eq!(
            op,
            RowOperation::Swap {
                first: 0,
                second: 1
            }
        );
    }

    #[test]
    fn test_scale_with_fraction() {
        let op = parse_row_command(CommandKind::Scale, " 2   -3/4 ", 3).unwrap();
        assert_eq!(
            op,
            RowOperation::Scale {
                row: 1,
                factor: ratio(-3, 4).unwrap()
            }
        );
    }

    #[test]
    fn test_add_scaled() {
        let op = parse_row_command(CommandKind::AddScaled, "2 1 -1", 2).unwrap();
        assert_eq!(
            op,
            RowOperation::AddScaled {
                source: 1,
                target: 0,
                factor: from_int(-1)
            }
        );
    }

    #[test]
    fn test_row_zero_is_out_of_range() {
        assert_eq!(
            parse_row_command(CommandKind::Swap, "0 1", 2),
            Err(Error::InvalidIndex { index: -1, rows: 2 })
        );
        assert_eq!(
            parse_row_command(CommandKind::Swap, "1 3", 2),
            Err(Error::InvalidIndex { index: 2, rows: 2 })
        );
    }

    #[test]
    fn test_huge_row_is_out_of_range() {
        assert_eq!(
            parse_row_command(CommandKind::Swap, "99999999999999999999 1", 3),
            Err(Error::InvalidIndex {
                index: i64::MAX,
                rows: 3
            })
        );
        assert_eq!(
            parse_row_command(CommandKind::Scale, "-99999999999999999999 2", 3),
            Err(Error::InvalidIndex {
                index: i64::MIN,
                rows: 3
            })
        );
    }

    #[test]
    fn test_wrong_arity() {
        assert!(matches!(
            parse_row_command(CommandKind::AddScaled, "1 2", 2),
            Err(Error::MalformedInput { .. })
        ));
        assert!(matches!(
            parse_row_command(CommandKind::Swap, "", 2),
            Err(Error::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_non_integer_row() {
        assert!(matches!(
            parse_row_command(CommandKind::Swap, "1.5 2", 2),
            Err(Error::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_bad_factor() {
        assert!(matches!(
            parse_row_command(CommandKind::Scale, "1 abc", 2),
            Err(Error::InvalidFactor { .. })
        ));
        assert!(matches!(
            parse_row_command(CommandKind::Scale, "1 1/0", 2),
            Err(Error::InvalidFactor { .. })
        ));
        assert!(matches!(
            parse_row_command(CommandKind::Scale, "1 0", 2),
            Err(Error::InvalidFactor { .. })
        ));
    }

    #[test]
    fn test_expression_is_not_evaluated() {
        assert!(matches!(
            parse_row_command(CommandKind::Scale, "1 2*3", 2),
            Err(Error::InvalidFactor { .. })
        ));
    }
}
