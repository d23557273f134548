use crate::algebra::{DenseVector, Entry, MatrixError, ScalarT, MAX_MATRIX_SIZE};

// Map a logical (i, j) coordinate to its physical slot in diagonal-major
// storage with lbw subdiagonals.  Diagonal d holds the cells with
// j - i == d - lbw; the position within a diagonal is i + min(j - i, 0).
pub(crate) fn band_position(i: usize, j: usize, lbw: usize) -> (usize, usize) {
    let diff = j as isize - i as isize;
    let diag = (lbw as isize + diff) as usize;
    let pos = (i as isize + diff.min(0)) as usize;
    (diag, pos)
}

/// Diagonal-major storage shared by the banded layouts.
///
/// Holds `lbw + ubw + 1` diagonals; diagonal `d` sits at offset `d - lbw`
/// from the main diagonal and has length `n - |offset|`.  Cells outside
/// the band are not stored and read as zero through
/// [`try_entry`](BandStorage::try_entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BandStorage<T> {
    n: usize,
    lbw: usize,
    ubw: usize,
    diagonals: Vec<DenseVector<T>>,
}

impl<T> BandStorage<T>
where
    T: ScalarT,
{
    pub fn new(n: usize, lbw: usize, ubw: usize) -> Result<Self, MatrixError> {
        if n == 0 || n > MAX_MATRIX_SIZE {
            return Err(MatrixError::InvalidDimension);
        }
        if lbw >= n || ubw >= n {
            return Err(MatrixError::InvalidDimension);
        }
        let total = lbw + ubw + 1;
        let diagonals = (0..total)
            .map(|d| {
                let offset = d as isize - lbw as isize;
                DenseVector::zeros(n - offset.unsigned_abs())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            n,
            lbw,
            ubw,
            diagonals,
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn lbw(&self) -> usize {
        self.lbw
    }

    pub fn ubw(&self) -> usize {
        self.ubw
    }

    pub fn in_bounds(&self, i: usize, j: usize) -> bool {
        i < self.n && j < self.n
    }

    // true if (i, j) falls on a stored diagonal
    pub fn in_band(&self, i: usize, j: usize) -> bool {
        let diff = j as isize - i as isize;
        -(self.lbw as isize) <= diff && diff <= self.ubw as isize
    }

    // Direct read of a stored cell.  Callers must have established that
    // (i, j) is in bounds and in band.
    pub fn stored(&self, i: usize, j: usize) -> T {
        debug_assert!(self.in_bounds(i, j) && self.in_band(i, j));
        let (d, p) = band_position(i, j, self.lbw);
        self.diagonals[d][p]
    }

    pub fn stored_mut(&mut self, i: usize, j: usize) -> &mut T {
        debug_assert!(self.in_bounds(i, j) && self.in_band(i, j));
        let (d, p) = band_position(i, j, self.lbw);
        &mut self.diagonals[d][p]
    }

    pub fn try_entry(&self, i: usize, j: usize) -> Result<Entry<T>, MatrixError> {
        if !self.in_bounds(i, j) {
            return Err(MatrixError::IndexOutOfRange);
        }
        if !self.in_band(i, j) {
            return Ok(Entry::Implicit);
        }
        Ok(Entry::Stored(self.stored(i, j)))
    }

    // Checked read.  Out-of-band cells report OutOfBand so callers can
    // tell a logical zero from a stored value.
    pub fn get(&self, i: usize, j: usize) -> Result<T, MatrixError> {
        match self.try_entry(i, j)? {
            Entry::Stored(v) => Ok(v),
            Entry::Implicit => Err(MatrixError::OutOfBand),
        }
    }

    pub fn set(&mut self, i: usize, j: usize, v: T) -> Result<(), MatrixError> {
        if !self.in_bounds(i, j) {
            return Err(MatrixError::IndexOutOfRange);
        }
        if !self.in_band(i, j) {
            return Err(MatrixError::OutOfBand);
        }
        *self.stored_mut(i, j) = v;
        Ok(())
    }
}

#[test]
fn test_band_position_mapping() {
    // n = 4, lbw = 1, ubw = 2: diagonals at offsets -1, 0, +1, +2
    assert_eq!(band_position(1, 0, 1), (0, 0));
    assert_eq!(band_position(3, 2, 1), (0, 2));
    assert_eq!(band_position(0, 0, 1), (1, 0));
    assert_eq!(band_position(3, 3, 1), (1, 3));
    assert_eq!(band_position(0, 1, 1), (2, 0));
    assert_eq!(band_position(2, 3, 1), (2, 2));
    assert_eq!(band_position(0, 2, 1), (3, 0));
    assert_eq!(band_position(1, 3, 1), (3, 1));
}

#[test]
fn test_band_storage_diagonal_lengths() {
    let s = BandStorage::<f64>::new(4, 1, 2).unwrap();
    assert_eq!(s.diagonals.len(), 4);
    assert_eq!(s.diagonals[0].len(), 3); // offset -1
    assert_eq!(s.diagonals[1].len(), 4); // main
    assert_eq!(s.diagonals[2].len(), 3); // offset +1
    assert_eq!(s.diagonals[3].len(), 2); // offset +2
}
