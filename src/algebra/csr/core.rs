use crate::algebra::{
    display_grid, Entry, MatrixError, MatrixStore, ScalarT, SparseFormatError, MAX_MATRIX_SIZE,
};
use std::fmt;
use std::ops::Range;

/// Sparse matrix in Compressed Sparse Row (CSR) format
///
/// __Example usage__ : to construct the 3 x 3 matrix
/// ```text
/// A = [1.  2.  0.]
///     [0.  3.  1.]
///     [2.  0.  1.]
/// ```
///
/// ```no_run
/// use bandmat::algebra::{CsrMatrix, MatrixStore};
///
/// let mut A: CsrMatrix<f64> = CsrMatrix::new(3, 3).unwrap();
/// A.set(0, 0, 1.).unwrap();
/// A.set(0, 1, 2.).unwrap();
/// A.set(1, 1, 3.).unwrap();
/// A.set(1, 2, 1.).unwrap();
/// A.set(2, 0, 2.).unwrap();
/// A.set(2, 2, 1.).unwrap();
///
/// assert_eq!(A.nnz(), 6);
///
/// // optional correctness check
/// assert!(A.check_format().is_ok());
/// ```
///
/// Zero values are never stored: setting a cell to zero removes its entry
/// entirely.  Entries within a row keep insertion order rather than column
/// order.
#[derive(Debug, Clone)]
pub struct CsrMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// CSR format row pointer.
    ///
    /// This field has length `m + 1`; `rowptr[i]` is the offset of row
    /// `i`'s first entry in the `colval` and `nzval` fields, and the last
    /// entry equals the number of stored nonzeros.
    pub rowptr: Vec<usize>,
    /// vector of column indices, in insertion order within each row
    pub colval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CsrMatrix<T>
where
    T: ScalarT,
{
    /// An empty `m` x `n` matrix with no stored entries.
    pub fn new(m: usize, n: usize) -> Result<Self, MatrixError> {
        if m == 0 || n == 0 || m > MAX_MATRIX_SIZE || n > MAX_MATRIX_SIZE {
            return Err(MatrixError::InvalidDimension);
        }
        Ok(Self {
            m,
            n,
            rowptr: vec![0; m + 1],
            colval: vec![],
            nzval: vec![],
        })
    }

    /// `CsrMatrix` constructor from raw parts.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.  This constructor does __not__ ensure that column indices
    /// are in bounds or unique within each row; responsibility for those
    /// conditions is left to the caller (see
    /// [`check_format`](CsrMatrix::check_format)).
    pub fn from_parts(
        m: usize,
        n: usize,
        rowptr: Vec<usize>,
        colval: Vec<usize>,
        nzval: Vec<T>,
    ) -> Self {
        assert_eq!(colval.len(), nzval.len());
        assert_eq!(rowptr.len(), m + 1);
        assert_eq!(rowptr[m], colval.len());
        CsrMatrix {
            m,
            n,
            rowptr,
            colval,
            nzval,
        }
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        if n == 0 || n > MAX_MATRIX_SIZE {
            return Err(MatrixError::InvalidDimension);
        }
        let rowptr = (0usize..=n).collect();
        let colval = (0usize..n).collect();
        let nzval = vec![T::one(); n];
        Ok(Self::from_parts(n, n, rowptr, colval, nzval))
    }

    /// number of stored nonzeros
    pub fn nnz(&self) -> usize {
        self.rowptr[self.m]
    }

    pub(crate) fn row_range(&self, i: usize) -> Range<usize> {
        self.rowptr[i]..self.rowptr[i + 1]
    }

    // offset of (i, j) in the parallel arrays, if stored
    fn find_in_row(&self, i: usize, j: usize) -> Option<usize> {
        self.row_range(i).find(|&p| self.colval[p] == j)
    }

    fn in_bounds(&self, i: usize, j: usize) -> bool {
        i < self.m && j < self.n
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.colval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.rowptr.is_empty()
            || (self.rowptr.len() - 1) != self.m
            || self.rowptr[self.m] != self.colval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for rowptr monotonicity
        if self.rowptr[0] != 0 || self.rowptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadRowptr);
        }

        //check for column values out of bounds
        if !self.colval.iter().all(|c| c < &self.n) {
            return Err(SparseFormatError::BadColval);
        }

        //check for duplicate columns within each row; entries are in
        //insertion order, so sort a copy before scanning
        for row in 0..self.m {
            let mut cols = self.colval[self.row_range(row)].to_vec();
            cols.sort_unstable();
            if cols.windows(2).any(|c| c[0] == c[1]) {
                return Err(SparseFormatError::DuplicateEntry);
            }
        }

        //zeros are never stored
        if self.nzval.iter().any(|v| *v == T::zero()) {
            return Err(SparseFormatError::StoredZero);
        }

        Ok(())
    }
}

impl<T> MatrixStore<T> for CsrMatrix<T>
where
    T: ScalarT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }

    /// Checked read: the stored value, or zero for an absent entry.
    /// Linear in the number of nonzeros of row `i`.
    fn get(&self, i: usize, j: usize) -> Result<T, MatrixError> {
        if !self.in_bounds(i, j) {
            return Err(MatrixError::IndexOutOfRange);
        }
        Ok(match self.find_in_row(i, j) {
            Some(p) => self.nzval[p],
            None => T::zero(),
        })
    }

    fn set(&mut self, i: usize, j: usize, v: T) -> Result<(), MatrixError> {
        if !self.in_bounds(i, j) {
            return Err(MatrixError::IndexOutOfRange);
        }
        match self.find_in_row(i, j) {
            Some(p) if v == T::zero() => {
                // remove the entry entirely and pull every later row back
                self.nzval.remove(p);
                self.colval.remove(p);
                for r in self.rowptr[(i + 1)..].iter_mut() {
                    *r -= 1;
                }
            }
            Some(p) => self.nzval[p] = v,
            None if v == T::zero() => {}
            None => {
                // append at the end of row i's slice
                let end = self.rowptr[i + 1];
                self.nzval.insert(end, v);
                self.colval.insert(end, j);
                for r in self.rowptr[(i + 1)..].iter_mut() {
                    *r += 1;
                }
            }
        }
        Ok(())
    }

    fn try_entry(&self, i: usize, j: usize) -> Result<Entry<T>, MatrixError> {
        if !self.in_bounds(i, j) {
            return Err(MatrixError::IndexOutOfRange);
        }
        Ok(match self.find_in_row(i, j) {
            Some(p) => Entry::Stored(self.nzval[p]),
            None => Entry::Implicit,
        })
    }
}

// logical comparison: entry order within a row is insertion-driven and
// not significant
impl<T> PartialEq for CsrMatrix<T>
where
    T: ScalarT,
{
    fn eq(&self, other: &Self) -> bool {
        if self.m != other.m || self.n != other.n || self.nnz() != other.nnz() {
            return false;
        }
        for i in 0..self.m {
            if self.row_range(i).len() != other.row_range(i).len() {
                return false;
            }
            for p in self.row_range(i) {
                match other.find_in_row(i, self.colval[p]) {
                    Some(q) if other.nzval[q] == self.nzval[p] => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T> fmt::Display for CsrMatrix<T>
where
    T: ScalarT,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_grid(self, f)
    }
}
