#![allow(non_snake_case)]

use bandmat::algebra::*;

// the same logical tridiagonal matrix in every layout that can hold it
fn tridiagonal_variants(n: usize) -> Vec<DynMatrix<f64>> {
    let mut dense = DenseMatrix::zeros(n).unwrap();
    let mut band = GeneralBandMatrix::new(n, 1, 1).unwrap();
    let mut sym = SymmetricBandMatrix::new(n, 1).unwrap();
    let mut csr = CsrMatrix::new(n, n).unwrap();

    for i in 0..n {
        for j in i.saturating_sub(1)..=(i + 1).min(n - 1) {
            let v = 1. + (i + j) as f64;
            dense.set(i, j, v).unwrap();
            band.set(i, j, v).unwrap();
            sym.set(i, j, v).unwrap();
            csr.set(i, j, v).unwrap();
        }
    }
    vec![
        DynMatrix::from(dense),
        DynMatrix::from(band),
        DynMatrix::from(sym),
        DynMatrix::from(csr),
    ]
}

#[test]
fn test_uniform_access_across_layouts() {
    let n = 4;
    for m in tridiagonal_variants(n) {
        assert_eq!(m.nrows(), n);
        assert_eq!(m.ncols(), n);
        assert_eq!(m.get(2, 1).unwrap(), 4.);
        assert_eq!(m.get(1, 2).unwrap(), 4.);
        assert_eq!(m.try_entry(2, 2).unwrap().value(), 5.);
        assert_eq!(m.get(n, 0).unwrap_err(), MatrixError::IndexOutOfRange);
    }
}

#[test]
fn test_rendering_is_layout_independent() {
    let grids: Vec<String> = tridiagonal_variants(3)
        .iter()
        .map(|m| format!("{}", m))
        .collect();
    for g in grids.iter().skip(1) {
        assert_eq!(*g, grids[0]);
    }
    assert_eq!(grids[0], "1 2 0\n2 3 4\n0 4 5\n");
}

#[test]
fn test_set_through_the_trait() {
    let n = 3;
    for mut m in tridiagonal_variants(n) {
        m.set(0, 1, 9.).unwrap();
        assert_eq!(m.get(0, 1).unwrap(), 9.);
    }

    // layout rules still apply behind the trait
    let mut m = DynMatrix::from(TriangleBandMatrix::<f64>::upper(3, 1).unwrap());
    assert_eq!(m.set(2, 0, 1.).unwrap_err(), MatrixError::TriangleViolation);
    let mut m = DynMatrix::from(GeneralBandMatrix::<f64>::new(3, 1, 1).unwrap());
    assert_eq!(m.set(0, 2, 1.).unwrap_err(), MatrixError::OutOfBand);
}
