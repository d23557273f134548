use crate::algebra::*;
use enum_dispatch::*;
use std::fmt;

/// Matrix shape marker for triangular matrices
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    Triu,
    /// Lower triangular matrix
    Tril,
}

/// A matrix of any supported storage layout.
///
/// Each layout appears as a distinct variant, and the capability set of
/// [`MatrixStore`] is dispatched to whichever variant is held.
/// Multiplication stays on the concrete types since the layout of a
/// product depends on the layouts of its operands.
#[enum_dispatch(MatrixStore<T>)]
#[derive(Debug, Clone, PartialEq)]
pub enum DynMatrix<T>
where
    T: ScalarT,
{
    DenseMatrix(DenseMatrix<T>),
    GeneralBandMatrix(GeneralBandMatrix<T>),
    SymmetricBandMatrix(SymmetricBandMatrix<T>),
    TriangleBandMatrix(TriangleBandMatrix<T>),
    CsrMatrix(CsrMatrix<T>),
}

impl<T> fmt::Display for DynMatrix<T>
where
    T: ScalarT,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_grid(self, f)
    }
}
