//! Promotion of exact values to floats and demotion back.
//!
//! Rational to float is exact up to the float's precision. Float to rational is exact
//! for every finite value; infinities and NaN have no rational counterpart.

use crate::complex_float::ComplexFloat;
use crate::complex_rational::ComplexRational;
use crate::error::ConversionError;
use crate::util::format_float;
use crate::DEFAULT_PRECISION;
use rug::{Assign, Float, Rational};

fn float_to_rational(value: &Float, part: &str) -> Result<Rational, ConversionError> {
    value.to_rational().ok_or_else(|| {
        ConversionError::NotFinite(format!("{} part is {}", part, format_float(value)))
    })
}

impl ComplexFloat {
    /// Promote an exact value to floats of `prec` bits
    pub fn from_rational(prec: u32, value: &ComplexRational) -> Self {
        ComplexFloat::with_val(prec, value.re(), value.im())
    }

    /// Overwrite with an exact value, rounding each part to its current precision
    pub fn set_rational(&mut self, value: &ComplexRational) {
        let (re, im) = self.parts_mut();
        re.assign(value.re());
        im.assign(value.im());
    }

    /// Demote to an exact value
    pub fn to_rational(&self) -> Result<ComplexRational, ConversionError> {
        Ok(ComplexRational::new(
            float_to_rational(self.re(), "real")?,
            float_to_rational(self.im(), "imaginary")?,
        ))
    }
}

impl From<&ComplexRational> for ComplexFloat {
    fn from(value: &ComplexRational) -> Self {
        ComplexFloat::from_rational(DEFAULT_PRECISION, value)
    }
}

impl TryFrom<&ComplexFloat> for ComplexRational {
    type Error = ConversionError;

    fn try_from(value: &ComplexFloat) -> Result<Self, Self::Error> {
        value.to_rational()
    }
}
