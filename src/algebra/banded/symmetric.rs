use crate::algebra::*;
use std::cmp::min;
use std::fmt;

/// Symmetric banded matrix storing only the upper triangle of its band.
///
/// A read or write at `(i, j)` with `i > j` is redirected to the mirrored
/// cell `(j, i)`, so there is exactly one physical cell per unordered
/// index pair and `A(i,j) == A(j,i)` holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymmetricBandMatrix<T = f64> {
    bands: BandStorage<T>,
}

// order an index pair into the stored triangle
fn mirror(i: usize, j: usize) -> (usize, usize) {
    if i > j {
        (j, i)
    } else {
        (i, j)
    }
}

impl<T> SymmetricBandMatrix<T>
where
    T: ScalarT,
{
    /// A zero matrix of order `n` with `bandwidth` diagonals on either
    /// side of the main diagonal.
    pub fn new(n: usize, bandwidth: usize) -> Result<Self, MatrixError> {
        Ok(Self {
            bands: BandStorage::new(n, 0, bandwidth)?,
        })
    }

    /// matrix order
    pub fn size(&self) -> usize {
        self.bands.n()
    }

    /// one-sided bandwidth
    pub fn bandwidth(&self) -> usize {
        self.bands.ubw()
    }

    /// Banded product `self * rhs` for operands of equal order.
    ///
    /// Only the upper triangle of the result band is computed and the
    /// result is declared symmetric by construction.  The exact product
    /// of two symmetric matrices need not be symmetric (it is whenever
    /// the operands commute), so this is a deliberate one-triangle
    /// approximation rather than the general-case product.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        let n = self.size();
        if n != rhs.size() {
            return Err(MatrixError::DimensionMismatch);
        }
        let bwa = self.bandwidth();
        let bwb = rhs.bandwidth();
        let bw = min(n - 1, bwa + bwb);
        let mut out = Self::new(n, bw)?;

        for i in 0..n {
            for j in i..=min(n - 1, i + bw) {
                let klo = i.saturating_sub(bwa).max(j.saturating_sub(bwb));
                let khi = min(n - 1, min(i + bwa, j + bwb));
                let mut sum = T::zero();
                for k in klo..=khi {
                    // both operands are read through their stored upper
                    // triangle
                    let (ai, ak) = mirror(i, k);
                    let (bk, bj) = mirror(k, j);
                    sum += self.bands.stored(ai, ak) * rhs.bands.stored(bk, bj);
                }
                if sum != T::zero() {
                    *out.bands.stored_mut(i, j) = sum;
                }
            }
        }
        Ok(out)
    }

    /// Expand to a dense matrix of the same order.
    pub fn to_dense(&self) -> Result<DenseMatrix<T>, MatrixError> {
        dense_from(self)
    }
}

impl<T> MatrixStore<T> for SymmetricBandMatrix<T>
where
    T: ScalarT,
{
    fn nrows(&self) -> usize {
        self.bands.n()
    }
    fn ncols(&self) -> usize {
        self.bands.n()
    }
    fn get(&self, i: usize, j: usize) -> Result<T, MatrixError> {
        let (i, j) = mirror(i, j);
        self.bands.get(i, j)
    }
    fn set(&mut self, i: usize, j: usize, v: T) -> Result<(), MatrixError> {
        let (i, j) = mirror(i, j);
        self.bands.set(i, j, v)
    }
    fn try_entry(&self, i: usize, j: usize) -> Result<Entry<T>, MatrixError> {
        let (i, j) = mirror(i, j);
        self.bands.try_entry(i, j)
    }
}

impl<T> fmt::Display for SymmetricBandMatrix<T>
where
    T: ScalarT,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_grid(self, f)
    }
}

#[test]
fn test_symmetric_mirror_law() {
    let mut a = SymmetricBandMatrix::<f64>::new(4, 2).unwrap();
    a.set(2, 0, 5.).unwrap();
    assert_eq!(a.get(0, 2).unwrap(), 5.);
    a.set(1, 3, -2.).unwrap();
    assert_eq!(a.get(3, 1).unwrap(), -2.);
}
