use crate::algebra::*;
use std::fmt;
use std::iter::zip;
use std::ops::{Index, IndexMut, Mul};

/// Square dense matrix stored as a vector of owned rows.
///
/// Each row is a [`DenseVector`]; ownership and copy/move semantics follow
/// it recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<T = f64> {
    n: usize,
    rows: Vec<DenseVector<T>>,
}

impl<T> DenseMatrix<T>
where
    T: ScalarT,
{
    /// A zero matrix of order `n`.
    pub fn zeros(n: usize) -> Result<Self, MatrixError> {
        if n == 0 || n > MAX_MATRIX_SIZE {
            return Err(MatrixError::InvalidDimension);
        }
        let rows = (0..n)
            .map(|_| DenseVector::zeros(n))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { n, rows })
    }

    /// Identity matrix of order `n`.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut out = Self::zeros(n)?;
        for i in 0..n {
            out[(i, i)] = T::one();
        }
        Ok(out)
    }

    /// matrix order
    pub fn size(&self) -> usize {
        self.n
    }

    /// Checked row access.
    pub fn row(&self, i: usize) -> Result<&DenseVector<T>, MatrixError> {
        self.rows.get(i).ok_or(MatrixError::IndexOutOfRange)
    }

    /// Elementwise sum with a matrix of the same order.
    pub fn try_add(&self, m: &Self) -> Result<Self, MatrixError> {
        if self.n != m.n {
            return Err(MatrixError::DimensionMismatch);
        }
        let rows = zip(&self.rows, &m.rows)
            .map(|(a, b)| a.try_add(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { n: self.n, rows })
    }

    /// Elementwise difference with a matrix of the same order.
    pub fn try_sub(&self, m: &Self) -> Result<Self, MatrixError> {
        if self.n != m.n {
            return Err(MatrixError::DimensionMismatch);
        }
        let rows = zip(&self.rows, &m.rows)
            .map(|(a, b)| a.try_sub(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { n: self.n, rows })
    }

    /// Matrix-vector product with a vector of matching length.
    pub fn try_mul_vec(&self, v: &DenseVector<T>) -> Result<DenseVector<T>, MatrixError> {
        if self.n != v.len() {
            return Err(MatrixError::DimensionMismatch);
        }
        let mut out = DenseVector::zeros(self.n)?;
        for (o, row) in zip(out.data_mut(), &self.rows) {
            *o = row.data().dot(v.data());
        }
        Ok(out)
    }

    /// Matrix product with a matrix of the same order.
    pub fn try_mul(&self, m: &Self) -> Result<Self, MatrixError> {
        if self.n != m.n {
            return Err(MatrixError::DimensionMismatch);
        }
        let mut out = Self::zeros(self.n)?;
        for i in 0..self.n {
            for j in 0..self.n {
                let mut sum = T::zero();
                for k in 0..self.n {
                    sum += self[(i, k)] * m[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        Ok(out)
    }
}

impl<T> Index<usize> for DenseMatrix<T> {
    type Output = DenseVector<T>;
    fn index(&self, i: usize) -> &DenseVector<T> {
        &self.rows[i]
    }
}

impl<T> IndexMut<usize> for DenseMatrix<T> {
    fn index_mut(&mut self, i: usize) -> &mut DenseVector<T> {
        &mut self.rows[i]
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        &self.rows[idx.0][idx.1]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut T {
        &mut self.rows[idx.0][idx.1]
    }
}

impl<T> Mul<T> for &DenseMatrix<T>
where
    T: ScalarT,
{
    type Output = DenseMatrix<T>;
    fn mul(self, c: T) -> DenseMatrix<T> {
        let rows = self.rows.iter().map(|r| r * c).collect();
        DenseMatrix { n: self.n, rows }
    }
}

impl<T> MatrixStore<T> for DenseMatrix<T>
where
    T: ScalarT,
{
    fn nrows(&self) -> usize {
        self.n
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn get(&self, i: usize, j: usize) -> Result<T, MatrixError> {
        if i >= self.n || j >= self.n {
            return Err(MatrixError::IndexOutOfRange);
        }
        Ok(self[(i, j)])
    }
    fn set(&mut self, i: usize, j: usize, v: T) -> Result<(), MatrixError> {
        if i >= self.n || j >= self.n {
            return Err(MatrixError::IndexOutOfRange);
        }
        self[(i, j)] = v;
        Ok(())
    }
    fn try_entry(&self, i: usize, j: usize) -> Result<Entry<T>, MatrixError> {
        self.get(i, j).map(Entry::Stored)
    }
}

impl<T> fmt::Display for DenseMatrix<T>
where
    T: ScalarT,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_grid(self, f)
    }
}

#[test]
fn test_identity_multiply_is_identity_map() {
    let mut a = DenseMatrix::<i64>::zeros(3).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            a[(i, j)] = (10 * i + j) as i64;
        }
    }
    let eye = DenseMatrix::<i64>::identity(3).unwrap();
    assert_eq!(a.try_mul(&eye).unwrap(), a);
    assert_eq!(eye.try_mul(&a).unwrap(), a);
}
