use crate::algebra::*;
use std::cmp::min;
use std::fmt;

/// One-sided banded matrix, upper or lower triangular.
///
/// Construction forces the unused side's bandwidth to zero.  Access on
/// the forbidden side of the diagonal is rejected outright with
/// [`MatrixError::TriangleViolation`]; it is never redirected or
/// substituted with zero by the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangleBandMatrix<T = f64> {
    bands: BandStorage<T>,
    uplo: MatrixTriangle,
}

impl<T> TriangleBandMatrix<T>
where
    T: ScalarT,
{
    /// A zero matrix of order `n` with `bandwidth` diagonals on the side
    /// selected by `uplo`.
    pub fn new(n: usize, bandwidth: usize, uplo: MatrixTriangle) -> Result<Self, MatrixError> {
        let bands = match uplo {
            MatrixTriangle::Triu => BandStorage::new(n, 0, bandwidth),
            MatrixTriangle::Tril => BandStorage::new(n, bandwidth, 0),
        }?;
        Ok(Self { bands, uplo })
    }

    /// Upper triangular matrix of order `n`.
    pub fn upper(n: usize, bandwidth: usize) -> Result<Self, MatrixError> {
        Self::new(n, bandwidth, MatrixTriangle::Triu)
    }

    /// Lower triangular matrix of order `n`.
    pub fn lower(n: usize, bandwidth: usize) -> Result<Self, MatrixError> {
        Self::new(n, bandwidth, MatrixTriangle::Tril)
    }

    /// matrix order
    pub fn size(&self) -> usize {
        self.bands.n()
    }

    /// orientation marker
    pub fn uplo(&self) -> MatrixTriangle {
        self.uplo
    }

    pub fn is_upper(&self) -> bool {
        self.uplo == MatrixTriangle::Triu
    }

    /// bandwidth of the stored side
    pub fn bandwidth(&self) -> usize {
        match self.uplo {
            MatrixTriangle::Triu => self.bands.ubw(),
            MatrixTriangle::Tril => self.bands.lbw(),
        }
    }

    fn forbidden(&self, i: usize, j: usize) -> bool {
        match self.uplo {
            MatrixTriangle::Triu => i > j,
            MatrixTriangle::Tril => i < j,
        }
    }

    /// Triangular product `self * rhs` for operands of equal order and
    /// orientation.
    ///
    /// The product of two like-oriented triangular matrices is triangular
    /// with the same orientation and the widened band
    /// `bw_a + bw_b`, capped at `n - 1`.  Orientation is part of the
    /// operand shape here, so mixed orientations are rejected as a
    /// dimension mismatch.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        let n = self.size();
        if n != rhs.size() || self.uplo != rhs.uplo {
            return Err(MatrixError::DimensionMismatch);
        }
        let bwa = self.bandwidth();
        let bwb = rhs.bandwidth();
        let bw = min(n - 1, bwa + bwb);
        let mut out = Self::new(n, bw, self.uplo)?;

        match self.uplo {
            MatrixTriangle::Triu => {
                for i in 0..n {
                    for j in i..=min(n - 1, i + bw) {
                        let klo = i.max(j.saturating_sub(bwb));
                        let khi = min(j, i + bwa);
                        let mut sum = T::zero();
                        for k in klo..=khi {
                            sum += self.bands.stored(i, k) * rhs.bands.stored(k, j);
                        }
                        if sum != T::zero() {
                            *out.bands.stored_mut(i, j) = sum;
                        }
                    }
                }
            }
            MatrixTriangle::Tril => {
                for i in 0..n {
                    for j in i.saturating_sub(bw)..=i {
                        let klo = j.max(i.saturating_sub(bwa));
                        let khi = min(i, j + bwb);
                        let mut sum = T::zero();
                        for k in klo..=khi {
                            sum += self.bands.stored(i, k) * rhs.bands.stored(k, j);
                        }
                        if sum != T::zero() {
                            *out.bands.stored_mut(i, j) = sum;
                        }
                    }
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

impl<T> MatrixStore<T> for TriangleBandMatrix<T>
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
        if self.forbidden(i, j) {
            return Err(MatrixError::TriangleViolation);
        }
        self.bands.get(i, j)
    }
    fn set(&mut self, i: usize, j: usize, v: T) -> Result<(), MatrixError> {
        if self.forbidden(i, j) {
            return Err(MatrixError::TriangleViolation);
        }
        self.bands.set(i, j, v)
    }
    fn try_entry(&self, i: usize, j: usize) -> Result<Entry<T>, MatrixError> {
        if self.forbidden(i, j) {
            return Err(MatrixError::TriangleViolation);
        }
        self.bands.try_entry(i, j)
    }
}

impl<T> fmt::Display for TriangleBandMatrix<T>
where
    T: ScalarT,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_grid(self, f)
    }
}

#[test]
fn test_triangle_forbidden_side_is_rejected() {
    let mut u = TriangleBandMatrix::<f64>::upper(3, 1).unwrap();
    assert_eq!(u.set(2, 0, 1.).unwrap_err(), MatrixError::TriangleViolation);
    assert_eq!(u.get(1, 0).unwrap_err(), MatrixError::TriangleViolation);

    let mut l = TriangleBandMatrix::<f64>::lower(3, 1).unwrap();
    assert_eq!(l.set(0, 2, 1.).unwrap_err(), MatrixError::TriangleViolation);
    assert_eq!(l.get(0, 1).unwrap_err(), MatrixError::TriangleViolation);
}
