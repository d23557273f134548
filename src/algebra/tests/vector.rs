use crate::algebra::*;

fn test_vector_123() -> DenseVector<f64> {
    DenseVector::from_slice(&[1., 2., 3.]).unwrap()
}

#[test]
fn test_construction_and_len() {
    let v = DenseVector::<f64>::zeros(4).unwrap();
    assert_eq!(v.len(), 4);
    assert!(!v.is_empty());
    for i in 0..4 {
        assert_eq!(v[i], 0.);
    }

    assert_eq!(
        DenseVector::<f64>::zeros(MAX_VECTOR_SIZE + 1).unwrap_err(),
        MatrixError::InvalidDimension
    );
}

#[test]
fn test_clone_has_its_own_memory() {
    let mut v = test_vector_123();
    let w = v.clone();
    v[0] = 10.;
    assert_eq!(w[0], 1.);
    assert_ne!(v, w);
}

#[test]
fn test_equality() {
    let v = test_vector_123();
    let w = test_vector_123();
    assert_eq!(v, w);

    // different length compares unequal
    let u = DenseVector::from_slice(&[1., 2.]).unwrap();
    assert_ne!(v, u);
}

#[test]
fn test_checked_indexing() {
    let mut v = test_vector_123();
    assert_eq!(*v.at(2).unwrap(), 3.);
    *v.at_mut(2).unwrap() = 7.;
    assert_eq!(v[2], 7.);

    assert_eq!(v.at(3).unwrap_err(), MatrixError::IndexOutOfRange);
    assert_eq!(v.at_mut(10).unwrap_err(), MatrixError::IndexOutOfRange);
}

#[test]
fn test_scalar_ops() {
    let v = test_vector_123();
    assert_eq!(&v + 1., DenseVector::from_slice(&[2., 3., 4.]).unwrap());
    assert_eq!(&v - 1., DenseVector::from_slice(&[0., 1., 2.]).unwrap());
    assert_eq!(&v * 2., DenseVector::from_slice(&[2., 4., 6.]).unwrap());
}

#[test]
fn test_vector_ops() {
    let v = test_vector_123();
    let w = DenseVector::from_slice(&[4., 5., 6.]).unwrap();

    assert_eq!(
        v.try_add(&w).unwrap(),
        DenseVector::from_slice(&[5., 7., 9.]).unwrap()
    );
    assert_eq!(
        w.try_sub(&v).unwrap(),
        DenseVector::from_slice(&[3., 3., 3.]).unwrap()
    );
    assert_eq!(v.dot(&w).unwrap(), 32.);
}

#[test]
fn test_vector_ops_size_mismatch() {
    let v = test_vector_123();
    let w = DenseVector::<f64>::zeros(5).unwrap();

    assert_eq!(v.try_add(&w).unwrap_err(), MatrixError::DimensionMismatch);
    assert_eq!(v.try_sub(&w).unwrap_err(), MatrixError::DimensionMismatch);
    assert_eq!(v.dot(&w).unwrap_err(), MatrixError::DimensionMismatch);
}

#[test]
fn test_display_is_space_separated() {
    let v = test_vector_123();
    assert_eq!(format!("{}", v), "1 2 3");
}
