//! Arbitrary-precision complex numbers.
//!
//! [`ComplexFloat`](complex_float::ComplexFloat) carries two `rug::Float` parts and the
//! transcendental functions, [`ComplexRational`](complex_rational::ComplexRational) carries
//! two exact `rug::Rational` parts, and [`Matrix`](matrix::Matrix) stores exact entries and
//! promotes them to floats for anything beyond the field operations.
#[macro_use]
mod ops;

pub mod complex_float;
pub mod complex_rational;
pub mod convert;
pub mod error;
pub mod matrix;
pub mod prelude;
mod util;

pub use ndarray;

/// Precision in bits used where none is given
pub const DEFAULT_PRECISION: u32 = 53;

/// Create a **[`Matrix`](matrix::Matrix)** from rows of entries at a precision.
///
/// ```
/// use bigplex::matrix;
/// use bigplex::complex_rational::ComplexRational;
///
/// let m = matrix![64; [ComplexRational::with_val(1, 0), ComplexRational::with_val(2, 0)],
///                     [ComplexRational::with_val(3, 0), ComplexRational::with_val(4, 0)]];
///
/// assert_eq!(m.dim(), (2, 2));
/// ```
///
/// Rows must have equal length; elements are moved into the resulting matrix.
///
#[macro_export]
macro_rules! matrix {
    ($prec:expr; $([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::matrix::Matrix::from_array($prec, $crate::ndarray::arr2(&[$([$($x,)*],)*]))
    }};
}
