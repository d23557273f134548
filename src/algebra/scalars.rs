use num_traits::{Num, NumAssign};
use std::fmt::{Debug, Display};

/// Core trait for matrix and vector element types.
///
/// All kernels are generic over values implementing `ScalarT`.  The additive
/// identity `T::zero()` doubles as the implicit value of any entry a storage
/// layout does not hold physically, so the trait requires only ring
/// arithmetic rather than full float semantics; both the native integer and
/// floating point primitives qualify.
///
/// `ScalarT` relies on [`num_traits`](num_traits) for most of its
/// constituent trait bounds.
pub trait ScalarT: 'static + Num + NumAssign + Copy + Default + Debug + Display {}

impl<T> ScalarT for T where T: 'static + Num + NumAssign + Copy + Default + Debug + Display {}
