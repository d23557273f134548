#![allow(non_snake_case)]

use bandmat::algebra::*;

fn csr_from_dense(rows: &[&[f64]]) -> CsrMatrix<f64> {
    let m = rows.len();
    let n = rows[0].len();
    let mut out = CsrMatrix::new(m, n).unwrap();
    for (i, row) in rows.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            out.set(i, j, v).unwrap();
        }
    }
    out
}

#[test]
fn test_sparse_product_scenario() {
    let A = csr_from_dense(&[&[1., 2., 0.], &[0., 3., 1.], &[2., 0., 1.]]);
    let B = csr_from_dense(&[&[2., 0., 1.], &[0., 1., 3.], &[1., 2., 0.]]);
    assert_eq!(A.nnz(), 6);
    assert_eq!(B.nnz(), 6);

    let C = A.try_mul(&B).unwrap();
    let expected = [[2., 2., 7.], [1., 5., 9.], [5., 2., 2.]];
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(C.get(i, j).unwrap(), expected[i][j]);
        }
    }

    // every entry of the expected product is nonzero
    assert_eq!(C.nnz(), 9);
    assert!(C.check_format().is_ok());
}

#[test]
fn test_product_drops_cancelled_entries() {
    // A row times B column cancelling to zero must not be stored
    let A = csr_from_dense(&[&[1., -1.], &[0., 2.]]);
    let B = csr_from_dense(&[&[1., 1.], &[1., 1.]]);

    let C = A.try_mul(&B).unwrap();
    assert_eq!(C.get(0, 0).unwrap(), 0.);
    assert_eq!(C.get(0, 1).unwrap(), 0.);
    assert_eq!(C.get(1, 0).unwrap(), 2.);
    assert_eq!(C.nnz(), 2);
}

#[test]
fn test_set_delete_lifecycle() {
    let mut A = csr_from_dense(&[&[1., 2., 0.], &[0., 3., 1.], &[2., 0., 1.]]);
    let before = A.nnz();

    A.set(1, 1, 0.).unwrap();
    assert_eq!(A.nnz(), before - 1);
    assert_eq!(A.get(1, 1).unwrap(), 0.);

    // neighbouring entries survive the parallel-array erase
    assert_eq!(A.get(1, 2).unwrap(), 1.);
    assert_eq!(A.get(2, 0).unwrap(), 2.);

    // re-inserting lands at the end of the row's slice
    A.set(1, 1, 9.).unwrap();
    assert_eq!(A.nnz(), before);
    assert_eq!(A.get(1, 1).unwrap(), 9.);
    assert!(A.check_format().is_ok());
}

#[test]
fn test_product_of_empty_is_empty() {
    let A = CsrMatrix::<f64>::new(3, 3).unwrap();
    let B = CsrMatrix::<f64>::identity(3).unwrap();
    let C = A.try_mul(&B).unwrap();
    assert_eq!(C.nnz(), 0);
}
