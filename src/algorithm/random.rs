//! Random matrix generation
//!
//! The level controller draws its matrices through the [`MatrixSource`] trait
//! so tests can swap in a seeded generator or a fixed script.

use super::helpers::validate_size;
use crate::config::{DEFAULT_ENTRY_HIGH, DEFAULT_ENTRY_LOW, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::scalar::from_int;
use rand::distr::{Distribution, Uniform};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of random integer matrices
pub trait MatrixSource {
    /// A `rows`×`cols` matrix of random entries
    fn random_block(&mut self, rows: usize, cols: usize) -> Matrix;

    /// An n×n matrix of random entries
    fn random_matrix(&mut self, n: usize) -> Matrix {
        self.random_block(n, n)
    }
}

impl<S: MatrixSource + ?Sized> MatrixSource for &mut S {
    fn random_block(&mut self, rows: usize, cols: usize) -> Matrix {
        (**self).random_block(rows, cols)
    }
}

/// Integer entries drawn uniformly from `[low, high)`
#[derive(Debug, Clone)]
pub struct RandomMatrices<R> {
    rng: R,
    dist: Uniform<i64>,
    low: i64,
    high: i64,
}

impl<R: Rng> RandomMatrices<R> {
    /// Generator over `rng` with entries in `[low, high)`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `high <= low`.
    pub fn new(rng: R, low: i64, high: i64) -> Result<Self> {
        let dist = Uniform::new(low, high).map_err(|e| {
            Error::invalid_argument("entry range", format!("[{low}, {high}) is empty: {e}"))
        })?;
        Ok(Self {
            rng,
            dist,
            low,
            high,
        })
    }

    /// The entry range as `(low, high)`, high exclusive
    pub fn range(&self) -> (i64, i64) {
        (self.low, self.high)
    }
}

impl RandomMatrices<ThreadRng> {
    /// Generator backed by the thread-local RNG
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `high <= low`.
    pub fn thread_local(low: i64, high: i64) -> Result<Self> {
        Self::new(rand::rng(), low, high)
    }
}

impl RandomMatrices<StdRng> {
    /// Reproducible generator seeded from `seed`
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `high <= low`.
    pub fn seeded(seed: u64, low: i64, high: i64) -> Result<Self> {
        Self::new(StdRng::seed_from_u64(seed), low, high)
    }
}

impl<R: Rng> MatrixSource for RandomMatrices<R> {
    fn random_block(&mut self, rows: usize, cols: usize) -> Matrix {
        let data = (0..rows * cols)
            .map(|_| from_int(self.dist.sample(&mut self.rng)))
            .collect();
        // length is rows * cols by construction
        Matrix::from_vec(rows, cols, data).unwrap_or_else(|_| Matrix::zeros(rows, cols))
    }
}

/// An n×n matrix with integer entries drawn uniformly from `[-10, 10)`
///
/// # Errors
///
/// Returns `Error::InvalidSize` if `n` is outside `[2, 5]`.
pub fn random_matrix(n: usize) -> Result<Matrix> {
    validate_size(n, DEFAULT_MIN_SIZE, DEFAULT_MAX_SIZE)?;
    let mut source = RandomMatrices::thread_local(DEFAULT_ENTRY_LOW, DEFAULT_ENTRY_HIGH)?;
    Ok(source.random_matrix(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_matrix_shape_and_range() {
        for n in 2..=5 {
            let a = random_matrix(n).unwrap();
            assert_eq!(a.shape(), (n, n));
            for v in a.as_slice() {
                assert!(v.is_integer());
                assert!(*v >= from_int(-10) && *v < from_int(10), "{v} out of range");
            }
        }
    }

    #[test]
    fn test_random_matrix_invalid_size() {
        assert!(matches!(random_matrix(1), Err(Error::InvalidSize { .. })));
        assert!(matches!(random_matrix(6), Err(Error::InvalidSize { .. })));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomMatrices::seeded(42, -10, 10).unwrap();
        let mut b = RandomMatrices::seeded(42, -10, 10).unwrap();
        assert_eq!(a.random_matrix(4), b.random_matrix(4));
        assert_eq!(a.random_block(3, 1), b.random_block(3, 1));
    }

    #[test]
    fn test_empty_range_rejected() {
        assert!(matches!(
            RandomMatrices::seeded(0, 3, 3),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_single_value_range() {
        let mut source = RandomMatrices::seeded(7, 4, 5).unwrap();
        assert_eq!(source.range(), (4, 5));
        let a = source.random_matrix(2);
        assert!(a.as_slice().iter().all(|v| *v == from_int(4)));
    }
}
