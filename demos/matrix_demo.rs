#![allow(non_snake_case)]

//! Console walk-through of the matrix layouts: dense sums, banded,
//! symmetric and triangular products, and a CSR product.
//!
//! Band entries are read as whitespace-separated scalars from stdin;
//! when stdin runs dry the built-in sample values are used instead, so
//! the demo also runs non-interactively.

use bandmat::algebra::*;
use std::io::Read;

struct ScalarStream {
    values: Vec<f64>,
    next: usize,
}

impl ScalarStream {
    fn from_stdin() -> Self {
        let mut buf = String::new();
        let _ = std::io::stdin().read_to_string(&mut buf);
        let values = buf
            .split_whitespace()
            .filter_map(|tok| tok.parse::<f64>().ok())
            .collect();
        Self { values, next: 0 }
    }

    fn next_or(&mut self, fallback: f64) -> f64 {
        let v = self.values.get(self.next).copied().unwrap_or(fallback);
        self.next += 1;
        v
    }
}

fn dense_sum_section() -> Result<(), MatrixError> {
    let n = 5;
    let mut a = DenseMatrix::<f64>::zeros(n)?;
    let mut b = DenseMatrix::<f64>::zeros(n)?;
    for i in 0..n {
        for j in i..n {
            a[(i, j)] = (i * 10 + j) as f64;
            b[(i, j)] = ((i * 10 + j) * 100) as f64;
        }
    }
    let c = a.try_add(&b)?;
    println!("Matrix a =\n{}", a);
    println!("Matrix b =\n{}", b);
    println!("Matrix c = a + b\n{}", c);
    Ok(())
}

fn band_product_section(input: &mut ScalarStream) -> Result<(), MatrixError> {
    let n = 3;
    let mut A = GeneralBandMatrix::<f64>::new(n, 1, 1)?;
    let mut B = GeneralBandMatrix::<f64>::new(n, 1, 1)?;

    let mut fallback = 1.;
    for m in [&mut A, &mut B] {
        for i in 0..n {
            for j in i.saturating_sub(1)..=(i + 1).min(n - 1) {
                m.set(i, j, input.next_or(fallback))?;
                fallback += 1.;
            }
        }
    }

    println!("Band matrix A:\n{}", A);
    println!("Band matrix B:\n{}", B);
    let C = A.try_mul(&B)?;
    println!("Product A * B:\n{}", C);
    Ok(())
}

fn symmetric_product_section() -> Result<(), MatrixError> {
    let mut A = SymmetricBandMatrix::<f64>::new(3, 1)?;
    A.set(0, 0, 1.)?;
    A.set(0, 1, 2.)?;
    A.set(1, 1, 3.)?;
    A.set(1, 2, 1.)?;
    A.set(2, 2, 2.)?;

    let mut B = SymmetricBandMatrix::<f64>::new(3, 1)?;
    B.set(0, 0, 2.)?;
    B.set(0, 1, 1.)?;
    B.set(1, 1, 1.)?;
    B.set(1, 2, 3.)?;
    B.set(2, 2, 1.)?;

    println!("Symmetric matrix A:\n{}", A);
    println!("Symmetric matrix B:\n{}", B);
    println!("Product A * B (upper triangle, mirrored):\n{}", A.try_mul(&B)?);
    Ok(())
}

fn triangle_section() -> Result<(), MatrixError> {
    let mut U = TriangleBandMatrix::<f64>::upper(3, 1)?;
    U.set(0, 0, 1.)?;
    U.set(0, 1, 2.)?;
    U.set(1, 1, 1.)?;
    U.set(1, 2, 1.)?;
    U.set(2, 2, 2.)?;

    println!("Upper triangular matrix U:\n{}", U);

    // writes below the diagonal are rejected outright
    if let Err(e) = U.set(2, 0, 5.) {
        println!("set(2, 0) rejected: {}", e);
    }

    println!("Product U * U:\n{}", U.try_mul(&U)?);
    Ok(())
}

fn csr_section() -> Result<(), MatrixError> {
    let mut A = CsrMatrix::<f64>::new(3, 3)?;
    A.set(0, 0, 1.)?;
    A.set(0, 1, 2.)?;
    A.set(1, 1, 3.)?;
    A.set(1, 2, 1.)?;
    A.set(2, 0, 2.)?;
    A.set(2, 2, 1.)?;

    let mut B = CsrMatrix::<f64>::new(3, 3)?;
    B.set(0, 0, 2.)?;
    B.set(0, 2, 1.)?;
    B.set(1, 1, 1.)?;
    B.set(1, 2, 3.)?;
    B.set(2, 0, 1.)?;
    B.set(2, 1, 2.)?;

    println!("CSR matrix A ({} nonzeros):\n{}", A.nnz(), A);
    println!("CSR matrix B ({} nonzeros):\n{}", B.nnz(), B);
    let C = A.try_mul(&B)?;
    println!("Product A * B ({} nonzeros):\n{}", C.nnz(), C);
    Ok(())
}

fn main() {
    let mut input = ScalarStream::from_stdin();

    println!("1) Sum of dense matrices:");
    if let Err(e) = dense_sum_section() {
        println!("dense section failed: {}", e);
    }

    println!("2) Product of band matrices:");
    if let Err(e) = band_product_section(&mut input) {
        println!("band section failed: {}", e);
    }

    println!("3) Product of symmetric band matrices:");
    if let Err(e) = symmetric_product_section() {
        println!("symmetric section failed: {}", e);
    }

    println!("4) Triangular matrices:");
    if let Err(e) = triangle_section() {
        println!("triangle section failed: {}", e);
    }

    println!("5) CSR matrices:");
    if let Err(e) = csr_section() {
        println!("CSR section failed: {}", e);
    }
}
