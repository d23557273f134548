use crate::algebra::*;

#[test]
fn test_construction_invariants() {
    assert_eq!(
        CsrMatrix::<f64>::new(0, 5).unwrap_err(),
        MatrixError::InvalidDimension
    );
    assert_eq!(
        CsrMatrix::<f64>::new(5, 0).unwrap_err(),
        MatrixError::InvalidDimension
    );
    assert_eq!(
        CsrMatrix::<f64>::new(MAX_MATRIX_SIZE + 1, 1).unwrap_err(),
        MatrixError::InvalidDimension
    );

    let a = CsrMatrix::<f64>::new(3, 4).unwrap();
    assert_eq!(a.nrows(), 3);
    assert_eq!(a.ncols(), 4);
    assert_eq!(a.nnz(), 0);
    assert_eq!(a.rowptr, vec![0; 4]);
}

#[test]
fn test_bounds_checking() {
    let mut a = CsrMatrix::<f64>::new(2, 3).unwrap();
    assert_eq!(a.get(2, 0).unwrap_err(), MatrixError::IndexOutOfRange);
    assert_eq!(a.get(0, 3).unwrap_err(), MatrixError::IndexOutOfRange);
    assert_eq!(a.set(2, 0, 1.).unwrap_err(), MatrixError::IndexOutOfRange);
    assert_eq!(
        a.try_entry(0, 3).unwrap_err(),
        MatrixError::IndexOutOfRange
    );
}

#[test]
fn test_nnz_bookkeeping() {
    let mut a = CsrMatrix::<f64>::new(3, 3).unwrap();
    a.set(0, 1, 1.).unwrap();
    a.set(1, 1, 2.).unwrap();
    a.set(2, 0, 3.).unwrap();
    assert_eq!(a.nnz(), 3);

    // overwriting a stored entry does not change the count
    a.set(1, 1, 5.).unwrap();
    assert_eq!(a.nnz(), 3);
    assert_eq!(a.get(1, 1).unwrap(), 5.);

    // deleting decrements by exactly one and later reads give zero
    a.set(1, 1, 0.).unwrap();
    assert_eq!(a.nnz(), 2);
    assert_eq!(a.get(1, 1).unwrap(), 0.);
    assert_eq!(a.try_entry(1, 1).unwrap(), Entry::Implicit);

    // deletion pulls the later rows' offsets back
    assert_eq!(a.get(2, 0).unwrap(), 3.);
    assert!(a.check_format().is_ok());
}

#[test]
fn test_entries_keep_insertion_order() {
    let mut a = CsrMatrix::<f64>::new(1, 4).unwrap();
    a.set(0, 3, 1.).unwrap();
    a.set(0, 0, 2.).unwrap();
    a.set(0, 2, 3.).unwrap();
    assert_eq!(a.colval, vec![3, 0, 2]);
    assert!(a.check_format().is_ok());
}

#[test]
fn test_logical_equality_ignores_insertion_order() {
    let mut a = CsrMatrix::<f64>::new(2, 3).unwrap();
    a.set(0, 2, 1.).unwrap();
    a.set(0, 0, 2.).unwrap();

    let mut b = CsrMatrix::<f64>::new(2, 3).unwrap();
    b.set(0, 0, 2.).unwrap();
    b.set(0, 2, 1.).unwrap();

    assert_eq!(a, b);

    b.set(1, 1, 4.).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_identity() {
    let eye = CsrMatrix::<f64>::identity(3).unwrap();
    assert_eq!(eye.nnz(), 3);
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1. } else { 0. };
            assert_eq!(eye.get(i, j).unwrap(), expected);
        }
    }
    assert!(eye.check_format().is_ok());
}

#[test]
fn test_display_prints_dense_grid() {
    let mut a = CsrMatrix::<f64>::new(2, 3).unwrap();
    a.set(0, 1, 4.).unwrap();
    a.set(1, 2, -1.).unwrap();
    assert_eq!(format!("{}", a), "0 4 0\n0 0 -1\n");
}

#[test]
fn test_multiply_dimension_mismatch() {
    let a = CsrMatrix::<f64>::new(2, 3).unwrap();
    let b = CsrMatrix::<f64>::new(2, 3).unwrap();
    assert_eq!(a.try_mul(&b).unwrap_err(), MatrixError::DimensionMismatch);
}

#[test]
fn test_multiply_rectangular() {
    // A (2x3) * B (3x2)
    let mut a = CsrMatrix::<f64>::new(2, 3).unwrap();
    a.set(0, 0, 1.).unwrap();
    a.set(0, 2, 2.).unwrap();
    a.set(1, 1, 3.).unwrap();

    let mut b = CsrMatrix::<f64>::new(3, 2).unwrap();
    b.set(0, 1, 4.).unwrap();
    b.set(1, 0, 5.).unwrap();
    b.set(2, 1, 6.).unwrap();

    let c = a.try_mul(&b).unwrap();
    assert_eq!(c.nrows(), 2);
    assert_eq!(c.ncols(), 2);
    assert_eq!(c.get(0, 0).unwrap(), 0.);
    assert_eq!(c.get(0, 1).unwrap(), 16.);
    assert_eq!(c.get(1, 0).unwrap(), 15.);
    assert_eq!(c.get(1, 1).unwrap(), 0.);
    assert_eq!(c.nnz(), 2);
    assert!(c.check_format().is_ok());
}
