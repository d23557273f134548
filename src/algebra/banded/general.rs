use crate::algebra::*;
use std::cmp::min;
use std::fmt;

/// Banded square matrix with independent lower and upper bandwidths.
///
/// Only the `lbw + ubw + 1` diagonals of the band are stored.  Cells
/// outside the band read as zero through
/// [`try_entry`](MatrixStore::try_entry) and are rejected by the strict
/// accessors with [`MatrixError::OutOfBand`].
///
/// __Example usage__ : to construct the 4 x 4 matrix
/// ```text
/// A = [a1 a2  0  0]
///     [a3 a4 a5  0]
///     [ 0 a6 a7 a8]
///     [ 0  0 a9 a10]
/// ```
/// use `GeneralBandMatrix::new(4, 1, 1)` and set the ten in-band cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralBandMatrix<T = f64> {
    bands: BandStorage<T>,
}

impl<T> GeneralBandMatrix<T>
where
    T: ScalarT,
{
    /// A zero matrix of order `n` with `lbw` subdiagonals and `ubw`
    /// superdiagonals.  Both bandwidths must be strictly smaller than `n`.
    pub fn new(n: usize, lbw: usize, ubw: usize) -> Result<Self, MatrixError> {
        Ok(Self {
            bands: BandStorage::new(n, lbw, ubw)?,
        })
    }

    /// matrix order
    pub fn size(&self) -> usize {
        self.bands.n()
    }

    /// `(lower, upper)` bandwidths
    pub fn bandwidths(&self) -> (usize, usize) {
        (self.bands.lbw(), self.bands.ubw())
    }

    /// Banded product `self * rhs` for operands of equal order.
    ///
    /// The result band is sized to the widened band
    /// `(lbw_a + lbw_b, ubw_a + ubw_b)`, capped at `n - 1` on either side,
    /// so no in-band product entry is ever dropped.  The inner sum runs
    /// only over the columns where both operands store a value; cells
    /// outside an operand's band contribute zero without being touched.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        let n = self.size();
        if n != rhs.size() {
            return Err(MatrixError::DimensionMismatch);
        }
        let (la, ua) = self.bandwidths();
        let (lb, ub) = rhs.bandwidths();
        let (lc, uc) = (min(n - 1, la + lb), min(n - 1, ua + ub));
        let mut out = Self::new(n, lc, uc)?;

        for i in 0..n {
            let jlo = i.saturating_sub(lc);
            let jhi = min(n - 1, i + uc);
            for j in jlo..=jhi {
                // A(i,k) is stored for i-la <= k <= i+ua and B(k,j) for
                // j-ub <= k <= j+lb; run k over the intersection
                let klo = i.saturating_sub(la).max(j.saturating_sub(ub));
                let khi = min(n - 1, min(i + ua, j + lb));
                let mut sum = T::zero();
                for k in klo..=khi {
                    sum += self.bands.stored(i, k) * rhs.bands.stored(k, j);
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

impl<T> MatrixStore<T> for GeneralBandMatrix<T>
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
        self.bands.get(i, j)
    }
    fn set(&mut self, i: usize, j: usize, v: T) -> Result<(), MatrixError> {
        self.bands.set(i, j, v)
    }
    fn try_entry(&self, i: usize, j: usize) -> Result<Entry<T>, MatrixError> {
        self.bands.try_entry(i, j)
    }
}

impl<T> fmt::Display for GeneralBandMatrix<T>
where
    T: ScalarT,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_grid(self, f)
    }
}

#[test]
fn test_band_product_widens_band() {
    let a = GeneralBandMatrix::<f64>::new(5, 1, 0).unwrap();
    let b = GeneralBandMatrix::<f64>::new(5, 1, 2).unwrap();
    let c = a.try_mul(&b).unwrap();
    assert_eq!(c.bandwidths(), (2, 2));

    // widened band caps at n - 1
    let a = GeneralBandMatrix::<f64>::new(3, 2, 2).unwrap();
    let c = a.try_mul(&a).unwrap();
    assert_eq!(c.bandwidths(), (2, 2));
}
