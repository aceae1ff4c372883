//! Text rendering of matrices
//!
//! Entries render as simplified fractions ("1/2", "-3", "0") separated by two
//! spaces, one row per line. An augmented matrix inserts a literal `|` token
//! between the working block and its companion.

use super::Matrix;
use crate::scalar::Rational;
use std::fmt;

/// Column separator token for augmented rendering
pub const DIVIDER: &str = "|";

const SEPARATOR: &str = "  ";

/// One rendered cell: a value or the augmentation divider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell<'a> {
    /// A matrix entry
    Value(&'a Rational),
    /// The `|` divider, rendered verbatim
    Divider,
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Value(v) => write!(f, "{v}"),
            Cell::Divider => f.write_str(DIVIDER),
        }
    }
}

fn write_rows<'a, I>(f: &mut impl fmt::Write, rows: I) -> fmt::Result
where
    I: IntoIterator<Item = Vec<Cell<'a>>>,
{
    for (i, row) in rows.into_iter().enumerate() {
        if i > 0 {
            f.write_char('\n')?;
        }
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "{cell}")?;
        }
    }
    Ok(())
}

/// Render `left | right` side by side
///
/// Rows beyond the shorter operand render with only the cells available.
pub fn render_augmented(left: &Matrix, right: &Matrix) -> String {
    let rows = left.rows().max(right.rows());
    let cells = (0..rows).map(|i| {
        let mut row: Vec<Cell<'_>> = Vec::with_capacity(left.cols() + right.cols() + 1);
        if i < left.rows() {
            row.extend(left.row(i).iter().map(Cell::Value));
        }
        row.push(Cell::Divider);
        if i < right.rows() {
            row.extend(right.row(i).iter().map(Cell::Value));
        }
        row
    });
    let mut out = String::new();
    // fmt::Write for String never fails
    let _ = write_rows(&mut out, cells);
    out
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(
            f,
            self.iter_rows()
                .map(|row| row.iter().map(Cell::Value).collect::<Vec<_>>()),
        )
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix({}x{}) [", self.rows(), self.cols())?;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{v}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
