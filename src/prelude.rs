//! bigplex prelude.
//!
//! This module contains the most used types, traits, and constants that you can
//! import easily as a group.
//!
//! ```
//! use bigplex::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::complex_float::ComplexFloat;
#[doc(no_inline)]
pub use crate::complex_rational::ComplexRational;
#[doc(no_inline)]
pub use crate::error::{ConversionError, MatrixError};
#[doc(no_inline)]
pub use crate::matrix::Matrix;
#[doc(no_inline)]
pub use crate::DEFAULT_PRECISION;
#[doc(no_inline)]
pub use num_traits::{One, Zero};
