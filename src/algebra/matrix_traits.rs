use crate::algebra::{DenseMatrix, MatrixError, ScalarT};
use enum_dispatch::*;
use std::fmt;

/// Result of a structural entry query on a storage layout.
///
/// Distinguishes a physically stored value from an entry the layout does
/// not hold, whose logical value is zero.  Index errors and triangle
/// violations travel on the `Result` the query is wrapped in, so callers
/// see all three cases as distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<T> {
    /// the entry is physically stored
    Stored(T),
    /// the entry is structurally absent and reads as zero
    Implicit,
}

impl<T> Entry<T>
where
    T: ScalarT,
{
    /// The logical value: the stored one, or zero for an absent entry.
    pub fn value(self) -> T {
        match self {
            Entry::Stored(v) => v,
            Entry::Implicit => T::zero(),
        }
    }

    /// True if the entry is physically stored.
    pub fn is_stored(&self) -> bool {
        matches!(self, Entry::Stored(_))
    }
}

/// Common capability set of every matrix storage layout: shape queries and
/// bounds- and layout-checked element access.
#[enum_dispatch]
pub trait MatrixStore<T>
where
    T: ScalarT,
{
    /// number of rows
    fn nrows(&self) -> usize;

    /// number of columns
    fn ncols(&self) -> usize;

    /// Checked read of the entry at `(i, j)`.
    ///
    /// Banded layouts report cells outside their stored diagonals as
    /// [`MatrixError::OutOfBand`]; triangular layouts reject the forbidden
    /// side of the diagonal with [`MatrixError::TriangleViolation`].
    fn get(&self, i: usize, j: usize) -> Result<T, MatrixError>;

    /// Checked write of the entry at `(i, j)`.
    fn set(&mut self, i: usize, j: usize, v: T) -> Result<(), MatrixError>;

    /// Structural query distinguishing stored from implicit entries.
    fn try_entry(&self, i: usize, j: usize) -> Result<Entry<T>, MatrixError>;
}

// Shared renderer: the full logical grid, row-major, space separated, one
// line per row, trailing newline.  Implicit entries and the forbidden
// triangle of a one-sided layout print as zero.
pub(crate) fn display_grid<T, M>(m: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: ScalarT,
    M: MatrixStore<T>,
{
    for i in 0..m.nrows() {
        for j in 0..m.ncols() {
            if j > 0 {
                write!(f, " ")?;
            }
            let v = match m.try_entry(i, j) {
                Ok(entry) => entry.value(),
                Err(_) => T::zero(),
            };
            write!(f, "{}", v)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// Dense expansion of a square storage layout, substituting zero for every
/// entry the layout does not hold.
pub(crate) fn dense_from<T, M>(m: &M) -> Result<DenseMatrix<T>, MatrixError>
where
    T: ScalarT,
    M: MatrixStore<T>,
{
    let n = m.nrows();
    let mut out = DenseMatrix::zeros(n)?;
    for i in 0..n {
        for j in 0..n {
            out[(i, j)] = match m.try_entry(i, j) {
                Ok(entry) => entry.value(),
                Err(_) => T::zero(),
            };
        }
    }
    Ok(out)
}
