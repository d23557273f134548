use crate::algebra::{MatrixError, ScalarT, VectorMath, MAX_VECTOR_SIZE};
use itertools::izip;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// Exclusively owned dense vector of scalar elements.
///
/// Constructed with a fixed nonzero length and fully mutable in place.
/// `Clone` deep-copies the elements; [`take`](DenseVector::take) transfers
/// ownership and leaves the source in the well defined empty state (length
/// zero, no elements).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseVector<T = f64> {
    data: Vec<T>,
}

impl<T> DenseVector<T>
where
    T: ScalarT,
{
    /// A vector of `sz` elements, all initialized to zero.
    pub fn zeros(sz: usize) -> Result<Self, MatrixError> {
        if sz == 0 || sz > MAX_VECTOR_SIZE {
            return Err(MatrixError::InvalidDimension);
        }
        Ok(Self {
            data: vec![T::zero(); sz],
        })
    }

    /// A vector copying its elements from a slice.
    pub fn from_slice(src: &[T]) -> Result<Self, MatrixError> {
        if src.is_empty() || src.len() > MAX_VECTOR_SIZE {
            return Err(MatrixError::InvalidDimension);
        }
        Ok(Self {
            data: src.to_vec(),
        })
    }

    /// number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True only for a moved-from source; see [`take`](DenseVector::take).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checked read access.
    pub fn at(&self, ind: usize) -> Result<&T, MatrixError> {
        self.data.get(ind).ok_or(MatrixError::IndexOutOfRange)
    }

    /// Checked write access.
    pub fn at_mut(&mut self, ind: usize) -> Result<&mut T, MatrixError> {
        self.data.get_mut(ind).ok_or(MatrixError::IndexOutOfRange)
    }

    /// Transfer ownership of the elements, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        Self {
            data: std::mem::take(&mut self.data),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub(crate) fn data(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Elementwise sum with a vector of the same length.
    pub fn try_add(&self, v: &Self) -> Result<Self, MatrixError> {
        if self.len() != v.len() {
            return Err(MatrixError::DimensionMismatch);
        }
        let mut out = Self::zeros(self.len())?;
        for (o, &a, &b) in izip!(out.data.iter_mut(), &self.data, &v.data) {
            *o = a + b;
        }
        Ok(out)
    }

    /// Elementwise difference with a vector of the same length.
    pub fn try_sub(&self, v: &Self) -> Result<Self, MatrixError> {
        if self.len() != v.len() {
            return Err(MatrixError::DimensionMismatch);
        }
        let mut out = Self::zeros(self.len())?;
        for (o, &a, &b) in izip!(out.data.iter_mut(), &self.data, &v.data) {
            *o = a - b;
        }
        Ok(out)
    }

    /// Dot product with a vector of the same length.
    pub fn dot(&self, v: &Self) -> Result<T, MatrixError> {
        if self.len() != v.len() {
            return Err(MatrixError::DimensionMismatch);
        }
        Ok(self.data.dot(&v.data))
    }
}

impl<T> Index<usize> for DenseVector<T> {
    type Output = T;
    fn index(&self, ind: usize) -> &T {
        &self.data[ind]
    }
}

impl<T> IndexMut<usize> for DenseVector<T> {
    fn index_mut(&mut self, ind: usize) -> &mut T {
        &mut self.data[ind]
    }
}

impl<T> Add<T> for &DenseVector<T>
where
    T: ScalarT,
{
    type Output = DenseVector<T>;
    fn add(self, c: T) -> DenseVector<T> {
        let mut out = self.clone();
        out.data.translate(c);
        out
    }
}

impl<T> Sub<T> for &DenseVector<T>
where
    T: ScalarT,
{
    type Output = DenseVector<T>;
    fn sub(self, c: T) -> DenseVector<T> {
        let mut out = self.clone();
        out.data.scalarop(|x| x - c);
        out
    }
}

impl<T> Mul<T> for &DenseVector<T>
where
    T: ScalarT,
{
    type Output = DenseVector<T>;
    fn mul(self, c: T) -> DenseVector<T> {
        let mut out = self.clone();
        out.data.scale(c);
        out
    }
}

impl<T> fmt::Display for DenseVector<T>
where
    T: ScalarT,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

#[test]
fn test_vector_take_leaves_source_empty() {
    let mut v = DenseVector::from_slice(&[1., 2., 3.]).unwrap();
    let w = v.take();
    assert_eq!(w.len(), 3);
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
}

#[test]
fn test_vector_zero_length_is_rejected() {
    assert_eq!(
        DenseVector::<f64>::zeros(0).unwrap_err(),
        MatrixError::InvalidDimension
    );
    assert_eq!(
        DenseVector::<f64>::from_slice(&[]).unwrap_err(),
        MatrixError::InvalidDimension
    );
}
