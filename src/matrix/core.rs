//! Core Matrix type

use crate::error::{Error, Result};
use crate::scalar::{from_int, Rational};
use num_traits::{One, Zero};
use std::ops::Index;

/// Dense row-major matrix of exact rationals
///
/// Game matrices are square, but the type is rectangular so it can also hold
/// an augmentation column and products. Values are never mutated through the
/// public API: row operations and arithmetic return new matrices.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Rational>,
}

impl Matrix {
    /// Create a matrix from row-major data
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Rational>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::dimension_mismatch(
                "from_vec",
                (rows, cols),
                (1, data.len()),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a list of rows
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for row in rows {
            if row.len() != cols {
                return Err(Error::dimension_mismatch("from_rows", (1, cols), (1, row.len())));
            }
            data.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols,
            data,
        })
    }

    /// Create a matrix from rows of integers
    ///
    /// ```
    /// use lingame::matrix::Matrix;
    ///
    /// let a = Matrix::from_i64_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(a.shape(), (2, 2));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if the rows differ in length.
    pub fn from_i64_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.as_ref().iter().map(|&v| from_int(v)).collect())
                .collect(),
        )
    }

    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Rational::zero(); rows * cols],
        }
    }

    /// n×n identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = Rational::one();
        }
        m
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether rows == cols
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Rational> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Row `i` as a slice
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    pub fn row(&self, i: usize) -> &[Rational] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Rational]> + '_ {
        // chunks_exact panics on a zero chunk size
        let width = self.cols.max(1);
        self.data
            .chunks_exact(width)
            .take(if self.cols == 0 { 0 } else { self.rows })
    }

    /// Row-major entries
    pub fn as_slice(&self) -> &[Rational] {
        &self.data
    }

    /// Transpose: entry `(i, j)` moves to `(j, i)`
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j].clone());
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Matrix product `self @ other`
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if `self.cols != other.rows`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::dimension_mismatch("matmul", self.shape(), other.shape()));
        }
        let (m, k, n) = (self.rows, self.cols, other.cols);
        let mut out = Matrix::zeros(m, n);
        for i in 0..m {
            for j in 0..n {
                let mut acc = Rational::zero();
                for p in 0..k {
                    acc += &self.data[i * k + p] * &other.data[p * n + j];
                }
                out.data[i * n + j] = acc;
            }
        }
        Ok(out)
    }

    /// Matrix with row `row` and column `col` removed
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn minor(&self, row: usize, col: usize) -> Matrix {
        assert!(row < self.rows && col < self.cols, "minor index out of bounds");
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in (0..self.rows).filter(|&i| i != row) {
            for j in (0..self.cols).filter(|&j| j != col) {
                data.push(self.data[i * self.cols + j].clone());
            }
        }
        Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        }
    }

    /// Whether this is exactly the identity matrix of its size
    pub fn is_identity(&self) -> bool {
        self.is_square()
            && self.data.iter().enumerate().all(|(idx, v)| {
                let (i, j) = (idx / self.cols, idx % self.cols);
                if i == j {
                    v.is_one()
                } else {
                    v.is_zero()
                }
            })
    }

    /// Apply `f` to every entry, producing a new matrix
    pub fn map(&self, f: impl Fn(&Rational) -> Rational) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [Rational] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Rational {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
