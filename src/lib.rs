//! __bandmat__ is a small family of matrix and vector storage kernels for
//! numerical computation: an exclusively-owned dense vector and matrix,
//! three banded layouts (general, symmetric and triangular) that store only
//! the diagonals near the main diagonal, and a compressed sparse row (CSR)
//! matrix for arbitrary sparsity patterns.
//!
//! Every layout exposes the same capability set through
//! [`MatrixStore`](crate::algebra::MatrixStore): shape queries, bounds- and
//! layout-checked element access, and a dense textual rendering.  The
//! multiplication routines respect and preserve each layout: the product of
//! two banded matrices is banded with the widened band, and the product of
//! two like-oriented triangular matrices is triangular.

pub mod algebra;
