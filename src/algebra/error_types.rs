use thiserror::Error;

/// Error type returned by matrix construction, access and arithmetic
/// operations.
///
/// Errors are raised at the point of violation and propagate to the
/// immediate caller.  [`OutOfBand`](MatrixError::OutOfBand) is special in
/// that the cell it reports has a well defined logical value of zero;
/// callers wanting that value should query through
/// [`try_entry`](crate::algebra::MatrixStore::try_entry) instead of
/// substituting zero for the error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A size, bandwidth or row/column count violates a construction invariant
    #[error("Dimension violates a construction invariant")]
    InvalidDimension,
    /// A requested index lies outside the declared logical shape
    #[error("Matrix indices out of range")]
    IndexOutOfRange,
    /// A requested entry of a banded matrix lies outside the stored diagonals
    #[error("Entry outside bandwidth")]
    OutOfBand,
    /// A requested entry lies on the forbidden side of a triangular matrix
    #[error("Entry on the forbidden side of the diagonal")]
    TriangleViolation,
    /// Operand shapes are incompatible for the requested operation
    #[error("Operand dimensions are incompatible")]
    DimensionMismatch,
}

/// Error type returned by the CSR format self-check.
#[derive(Error, Debug)]
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Matrix row pointer values are defective
    #[error("Bad row pointer values")]
    BadRowptr,
    /// Column value exceeds the matrix column dimension
    #[error("Column value exceeds the matrix column dimension")]
    BadColval,
    /// A column appears more than once within a row
    #[error("Duplicate column entry within a row")]
    DuplicateEntry,
    /// A zero value is stored explicitly
    #[error("Explicitly stored zero value")]
    StoredZero,
}
