//! Matrix and vector storage layouts and their arithmetic.

mod banded;
mod csr;
mod dense;
mod error_types;
mod matrix_traits;
mod matrix_types;
mod scalars;
mod vecmath;

//flatten all layout implementations to appear in this module
pub use banded::*;
pub use csr::*;
pub use dense::*;
pub use error_types::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub use scalars::*;
pub use vecmath::*;

#[cfg(test)]
mod tests;

/// Largest allowable vector length.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Largest allowable matrix row or column dimension.
pub const MAX_MATRIX_SIZE: usize = 10_000;
