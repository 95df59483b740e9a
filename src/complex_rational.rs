use crate::util::{format_rational, parse_rational};
use num_traits::{One, Zero};
use regex::Regex;
use rug::Rational;
use simple_error::{SimpleError, bail};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use std::sync::LazyLock;

static COMPLEX_RATIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?<re>[-+]?\d+(?:/\d+)?)\s*(?:\+\s*(?<im>[-+]?\d+(?:/\d+)?)\s*i)?\s*$")
        .expect("Invalid regex!")
});

/// A complex number with exact rational components.
///
/// Only the field operations are provided; transcendental functions go through
/// [`ComplexFloat`](crate::complex_float::ComplexFloat).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComplexRational {
    re: Rational,
    im: Rational,
}

impl ComplexRational {
    /// Create a new complex number from real and imaginary parts
    pub fn new(re: Rational, im: Rational) -> Self {
        ComplexRational { re, im }
    }

    /// Create a new complex number from anything a rational can be built from,
    /// e.g. `ComplexRational::with_val((19, 20), (-7, 20))`
    pub fn with_val<R, I>(re: R, im: I) -> Self
    where
        Rational: From<R> + From<I>,
    {
        ComplexRational::new(Rational::from(re), Rational::from(im))
    }

    /// Get the real part
    pub fn re(&self) -> &Rational {
        &self.re
    }

    /// Get the imaginary part
    pub fn im(&self) -> &Rational {
        &self.im
    }

    /// Split into `(re, im)`
    pub fn into_parts(self) -> (Rational, Rational) {
        (self.re, self.im)
    }

    fn sum(&self, other: &Self) -> Self {
        ComplexRational {
            re: Rational::from(&self.re + &other.re),
            im: Rational::from(&self.im + &other.im),
        }
    }

    fn difference(&self, other: &Self) -> Self {
        ComplexRational {
            re: Rational::from(&self.re - &other.re),
            im: Rational::from(&self.im - &other.im),
        }
    }

    fn product(&self, other: &Self) -> Self {
        let re_re = Rational::from(&self.re * &other.re);
        let im_im = Rational::from(&self.im * &other.im);
        let re_im = Rational::from(&self.re * &other.im);
        let im_re = Rational::from(&self.im * &other.re);
        ComplexRational {
            re: re_re - im_im,
            im: re_im + im_re,
        }
    }

    #[track_caller]
    fn quotient(&self, other: &Self) -> Self {
        match self.checked_div(other) {
            Some(value) => value,
            None => panic!("division of {} by zero", self),
        }
    }

    /// Divide, returning `None` when `other` is zero
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        let conj = other.conj();
        let numer = self.product(&conj);
        let denom = other.product(&conj);
        Some(ComplexRational {
            re: numer.re / &denom.re,
            im: numer.im / &denom.re,
        })
    }

    /// Get the complex conjugate
    pub fn conj(&self) -> Self {
        ComplexRational::new(self.re.clone(), Rational::from(-&self.im))
    }
}

impl_complex_op!(ComplexRational, Add, add, AddAssign, add_assign, sum);
impl_complex_op!(ComplexRational, Sub, sub, SubAssign, sub_assign, difference);
impl_complex_op!(ComplexRational, Mul, mul, MulAssign, mul_assign, product);
// Panics on a zero divisor, like `Rational` division
impl_complex_op!(ComplexRational, Div, div, DivAssign, div_assign, quotient);

impl Neg for ComplexRational {
    type Output = ComplexRational;

    fn neg(self) -> ComplexRational {
        ComplexRational::new(-self.re, -self.im)
    }
}

impl Neg for &ComplexRational {
    type Output = ComplexRational;

    fn neg(self) -> ComplexRational {
        ComplexRational::new(Rational::from(-&self.re), Rational::from(-&self.im))
    }
}

impl Zero for ComplexRational {
    fn zero() -> Self {
        ComplexRational::default()
    }

    fn is_zero(&self) -> bool {
        self.re.cmp0() == Ordering::Equal && self.im.cmp0() == Ordering::Equal
    }
}

impl One for ComplexRational {
    fn one() -> Self {
        ComplexRational::with_val(1, 0)
    }
}

impl fmt::Display for ComplexRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {}i",
            format_rational(&self.re),
            format_rational(&self.im)
        )
    }
}

impl FromStr for ComplexRational {
    type Err = SimpleError;

    /// Parse `"<n>/<d> + <n>/<d>i"`; a lone rational is taken as the real part
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(caps) = COMPLEX_RATIONAL_RE.captures(s) else {
            bail!("invalid complex rational {:?}", s);
        };

        let re = parse_rational(&caps["re"])?;
        let im = match caps.name("im") {
            Some(im) => parse_rational(im.as_str())?,
            None => Rational::new(),
        };

        Ok(ComplexRational::new(re, im))
    }
}
