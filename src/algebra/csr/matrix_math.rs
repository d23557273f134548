use crate::algebra::*;
use std::iter::zip;

impl<T> CsrMatrix<T>
where
    T: ScalarT,
{
    /// Sparse product `self * rhs` with matching inner dimension.
    ///
    /// Each result row is accumulated into a dense scratch row: for every
    /// nonzero `(i, k, v)` of `self`, row `k` of `rhs` is scanned and
    /// `v * b` added at each of its nonzero columns.  Only the nonzero
    /// scratch entries are then inserted into the result, so the work is
    /// proportional to the number of contributing nonzero pairs rather
    /// than to `m * n * inner`.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.n != rhs.m {
            return Err(MatrixError::DimensionMismatch);
        }
        let mut out = Self::new(self.m, rhs.n)?;
        let mut scratch = vec![T::zero(); rhs.n];

        for i in 0..self.m {
            scratch.set(T::zero());
            let rng = self.row_range(i);
            for (&k, &v) in zip(&self.colval[rng.clone()], &self.nzval[rng]) {
                for q in rhs.row_range(k) {
                    scratch[rhs.colval[q]] += v * rhs.nzval[q];
                }
            }
            for (j, &s) in scratch.iter().enumerate() {
                if s != T::zero() {
                    out.set(i, j, s)?;
                }
            }
        }
        Ok(out)
    }
}

#[test]
fn test_csr_identity_multiply() {
    let mut a = CsrMatrix::<f64>::new(3, 3).unwrap();
    a.set(0, 2, 2.).unwrap();
    a.set(1, 0, -3.).unwrap();
    a.set(2, 1, 4.).unwrap();

    let eye = CsrMatrix::<f64>::identity(3).unwrap();
    assert_eq!(a.try_mul(&eye).unwrap(), a);
    assert_eq!(eye.try_mul(&a).unwrap(), a);
}
