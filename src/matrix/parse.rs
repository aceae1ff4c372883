//! Parsing of user-typed matrices

use super::Matrix;
use crate::error::{Error, Result};
use crate::scalar::parse_rational;

/// Parse an n×n matrix typed row by row
///
/// Rows are separated by newlines and entries by whitespace; blank lines are
/// ignored. Each entry uses the grammar of [`parse_rational`].
///
/// # Errors
///
/// Returns `Error::MalformedInput` naming the offending row (and column, when
/// an entry fails to parse) if the row count, an entry count or an entry is
/// wrong.
pub fn parse_matrix(text: &str, n: usize) -> Result<Matrix> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() != n {
        return Err(Error::malformed(
            text,
            format!("expected exactly {n} rows, got {}", lines.len()),
        ));
    }

    let mut rows = Vec::with_capacity(n);
    for (i, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != n {
            return Err(Error::malformed(
                *line,
                format!(
                    "row {} must have exactly {n} entries, got {}",
                    i + 1,
                    tokens.len()
                ),
            ));
        }
        let row = tokens
            .iter()
            .enumerate()
            .map(|(j, token)| {
                parse_rational(token).map_err(|_| {
                    Error::malformed(
                        *token,
                        format!("row {}, column {} is not a number", i + 1, j + 1),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    Matrix::from_rows(rows)
}
