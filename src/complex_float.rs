use crate::util::{format_float, parse_float};
use crate::DEFAULT_PRECISION;
use num_traits::{One, Zero};
use regex::Regex;
use rug::float::{Constant, Special};
use rug::ops::Pow;
use rug::{Assign, Float};
use simple_error::{SimpleError, bail};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use std::sync::LazyLock;

static COMPLEX_FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?<re>[-+]?(?:[0-9.]+(?:[eE][-+]?\d+)?|(?i:inf|nan)))\s*(?:(?<sep>[-+])\s*(?<im>[-+]?(?:[0-9.]+(?:[eE][-+]?\d+)?|(?i:inf|nan)))\s*i)?\s*$",
    )
    .expect("Invalid regex!")
});

/// A complex number with arbitrary-precision float components.
///
/// Each component keeps its own precision. Every operation returns a new value whose
/// components are rounded to the precision of the corresponding component of the
/// left operand, and scratch values are built at the precision of the component they
/// are combined with.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexFloat {
    re: Float,
    im: Float,
}

fn pi(prec: u32) -> Float {
    Float::with_val(prec, Constant::Pi)
}

impl ComplexFloat {
    /// Create a new complex number from real and imaginary parts
    pub fn new(re: Float, im: Float) -> Self {
        ComplexFloat { re, im }
    }

    /// Create a new complex number with both parts at `prec` bits
    pub fn with_val<R, I>(prec: u32, re: R, im: I) -> Self
    where
        Float: Assign<R> + Assign<I>,
    {
        ComplexFloat::new(Float::with_val(prec, re), Float::with_val(prec, im))
    }

    /// Create a new complex number from f64 parts at the default precision
    pub fn from_f64(re: f64, im: f64) -> Self {
        ComplexFloat::with_val(DEFAULT_PRECISION, re, im)
    }

    /// Get the real part
    pub fn re(&self) -> &Float {
        &self.re
    }

    /// Get the imaginary part
    pub fn im(&self) -> &Float {
        &self.im
    }

    /// Split into `(re, im)`
    pub fn into_parts(self) -> (Float, Float) {
        (self.re, self.im)
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut Float, &mut Float) {
        (&mut self.re, &mut self.im)
    }

    /// Precision of the real and imaginary parts in bits
    pub fn prec(&self) -> (u32, u32) {
        (self.re.prec(), self.im.prec())
    }

    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    pub fn is_infinite(&self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    // re^2 + im^2 at the precision of the real part
    fn modulus_sqr(&self) -> Float {
        let prec = self.re.prec();
        let re_sqr = Float::with_val(prec, self.re.square_ref());
        let im_sqr = Float::with_val(self.im.prec(), self.im.square_ref());
        Float::with_val(prec, &re_sqr + &im_sqr)
    }

    fn sum(&self, other: &Self) -> Self {
        ComplexFloat {
            re: Float::with_val(self.re.prec(), &self.re + &other.re),
            im: Float::with_val(self.im.prec(), &self.im + &other.im),
        }
    }

    fn difference(&self, other: &Self) -> Self {
        ComplexFloat {
            re: Float::with_val(self.re.prec(), &self.re - &other.re),
            im: Float::with_val(self.im.prec(), &self.im - &other.im),
        }
    }

    fn product(&self, other: &Self) -> Self {
        ComplexFloat::product_at(self.prec(), self, other)
    }

    fn product_at((re_prec, im_prec): (u32, u32), a: &Self, b: &Self) -> Self {
        let re_re = Float::with_val(re_prec, &a.re * &b.re);
        let im_im = Float::with_val(re_prec, &a.im * &b.im);
        let re_im = Float::with_val(im_prec, &a.re * &b.im);
        let im_re = Float::with_val(im_prec, &a.im * &b.re);
        ComplexFloat {
            re: re_re - &im_im,
            im: re_im + &im_re,
        }
    }

    // a * conj(b) / (b * conj(b)); the imaginary part of the denominator is zero
    fn quotient(&self, other: &Self) -> Self {
        let (re_prec, im_prec) = self.prec();
        let conj = ComplexFloat::new(
            Float::with_val(re_prec, &other.re),
            Float::with_val(im_prec, -&other.im),
        );
        let numer = ComplexFloat::product_at(self.prec(), self, &conj);
        let denom = ComplexFloat::product_at(other.prec(), other, &conj);
        ComplexFloat {
            re: Float::with_val(re_prec, &numer.re / &denom.re),
            im: Float::with_val(im_prec, &numer.im / &denom.re),
        }
    }

    /// Get the complex conjugate
    pub fn conj(&self) -> Self {
        ComplexFloat::new(
            self.re.clone(),
            Float::with_val(self.im.prec(), -&self.im),
        )
    }

    /// Magnitude as a complex value with an exactly zero imaginary part
    pub fn abs(&self) -> Self {
        ComplexFloat::new(self.modulus_sqr().sqrt(), Float::new(DEFAULT_PRECISION))
    }

    /// Principal square root
    pub fn sqrt(&self) -> Self {
        let (re_prec, im_prec) = self.prec();
        let modulus = self.modulus_sqr().sqrt();

        let mut re = Float::with_val(re_prec, &modulus + &self.re);
        re /= 2;
        re.sqrt_mut();

        let mut im = Float::with_val(im_prec, &modulus - &self.re);
        im /= 2;
        im.sqrt_mut();
        match self.im.cmp0() {
            Some(sign) => im *= sign as i32,
            None => im.assign(Special::Nan),
        }

        ComplexFloat::new(re, im)
    }

    /// `atan(im / re)` in the real part, without quadrant correction.
    ///
    /// On the imaginary axis the result is `±π/2`, and `+∞` at the origin where the
    /// angle is undefined. The exact points `1`, `1 + i` and `-1` return their known
    /// angles instead of going through the arctangent.
    pub fn arg(&self) -> Self {
        let prec = self.re.prec();
        let angle = if self.re.is_zero() {
            match self.im.cmp0() {
                Some(Ordering::Less) => -(pi(prec) / 2),
                Some(Ordering::Equal) => Float::with_val(prec, Special::Infinity),
                Some(Ordering::Greater) => pi(prec) / 2,
                None => Float::with_val(prec, Special::Nan),
            }
        } else if self.re == 1 && self.im.is_zero() {
            Float::new(prec)
        } else if self.re == 1 && self.im == 1 {
            pi(prec) / 4
        } else if self.re == -1 && self.im.is_zero() {
            pi(prec)
        } else {
            Float::with_val(prec, &self.im / &self.re).atan()
        };

        ComplexFloat::new(angle, Float::new(self.im.prec()))
    }

    /// Two-argument arctangent of `(im, re)` in the real part
    pub fn atan2(&self) -> Self {
        let mut angle = self.arg();
        // arg already places -1 on the branch at π
        let negative_unit = self.re == -1 && self.im.is_zero();
        if self.re.cmp0() == Some(Ordering::Less) && !negative_unit {
            let prec = angle.re.prec();
            match self.im.cmp0() {
                Some(Ordering::Less) => angle.re -= pi(prec),
                Some(_) => angle.re += pi(prec),
                None => {}
            }
        }
        angle
    }

    /// `e^re * (cos(im), sin(im))`
    pub fn exp(&self) -> Self {
        let (re_prec, im_prec) = self.prec();
        let scale = Float::with_val(re_prec, self.re.exp_ref());
        let cos = Float::with_val(im_prec, self.im.cos_ref());
        let sin = Float::with_val(im_prec, self.im.sin_ref());
        ComplexFloat::new(
            Float::with_val(re_prec, &scale * &cos),
            Float::with_val(im_prec, &scale * &sin),
        )
    }

    /// `(e^(iz) + e^(-iz)) / 2`
    pub fn cos(&self) -> Self {
        let (re_prec, im_prec) = self.prec();
        let a = ComplexFloat::new(Float::with_val(im_prec, -&self.im), self.re.clone()).exp();
        let b = ComplexFloat::new(self.im.clone(), Float::with_val(re_prec, -&self.re)).exp();
        let half = ComplexFloat::new(Float::with_val(re_prec, 0.5), Float::new(im_prec));
        ComplexFloat::product_at(self.prec(), &(a + b), &half)
    }

    /// `(e^(-iz) - e^(iz)) * i / 2`
    pub fn sin(&self) -> Self {
        let (re_prec, im_prec) = self.prec();
        let a = ComplexFloat::new(self.im.clone(), Float::with_val(re_prec, -&self.re)).exp();
        let b = ComplexFloat::new(Float::with_val(im_prec, -&self.im), self.re.clone()).exp();
        let half_i = ComplexFloat::new(Float::new(re_prec), Float::with_val(im_prec, 0.5));
        ComplexFloat::product_at(self.prec(), &(a - b), &half_i)
    }

    pub fn tan(&self) -> Self {
        self.sin().quotient(&self.cos())
    }

    /// Natural logarithm, `(ln|z|, atan2(z))`
    pub fn ln(&self) -> Self {
        let re = self.modulus_sqr().sqrt().ln();
        let (im, _) = self.atan2().into_parts();
        ComplexFloat::new(re, im)
    }

    /// Raise to a complex power through the polar form, with the angle taken from
    /// [`arg`](ComplexFloat::arg).
    ///
    /// `0^0` is `+∞`, and `0` to a power with a positive real part is `0`.
    pub fn pow(&self, exponent: &Self) -> Self {
        let (re_prec, im_prec) = self.prec();
        if self.is_zero() {
            if exponent.is_zero() {
                return ComplexFloat::new(
                    Float::with_val(re_prec, Special::Infinity),
                    Float::new(im_prec),
                );
            }
            if exponent.re.cmp0() == Some(Ordering::Greater) {
                return ComplexFloat::new(Float::new(re_prec), Float::new(im_prec));
            }
        }

        let c = &exponent.re;
        let d = &exponent.im;
        let modulus_sqr = self.modulus_sqr();
        let (theta, _) = self.arg().into_parts();

        // |z|^c * e^(-d * arg z)
        let half_c = Float::with_val(c.prec(), c / 2);
        let mut magnitude = Float::with_val(modulus_sqr.prec(), (&modulus_sqr).pow(&half_c));
        let damping = -Float::with_val(theta.prec(), d * &theta);
        magnitude *= damping.exp();

        // c * arg z + d * ln|z|
        let mut angle = Float::with_val(c.prec(), c * &theta);
        let ln_modulus_sqr = Float::with_val(modulus_sqr.prec(), modulus_sqr.ln_ref());
        let mut twist = Float::with_val(d.prec(), d * &ln_modulus_sqr);
        twist /= 2;
        angle += &twist;

        let mut re = Float::with_val(angle.prec(), angle.cos_ref());
        re *= &magnitude;
        let mut im = Float::with_val(angle.prec(), angle.sin_ref());
        im *= &magnitude;
        ComplexFloat::new(Float::with_val(re_prec, re), Float::with_val(im_prec, im))
    }
}

impl_complex_op!(ComplexFloat, Add, add, AddAssign, add_assign, sum);
impl_complex_op!(ComplexFloat, Sub, sub, SubAssign, sub_assign, difference);
impl_complex_op!(ComplexFloat, Mul, mul, MulAssign, mul_assign, product);
impl_complex_op!(ComplexFloat, Div, div, DivAssign, div_assign, quotient);

impl Neg for ComplexFloat {
    type Output = ComplexFloat;

    fn neg(self) -> ComplexFloat {
        ComplexFloat::new(-self.re, -self.im)
    }
}

impl Neg for &ComplexFloat {
    type Output = ComplexFloat;

    fn neg(self) -> ComplexFloat {
        ComplexFloat::new(
            Float::with_val(self.re.prec(), -&self.re),
            Float::with_val(self.im.prec(), -&self.im),
        )
    }
}

impl Zero for ComplexFloat {
    fn zero() -> Self {
        ComplexFloat::with_val(DEFAULT_PRECISION, 0, 0)
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl One for ComplexFloat {
    fn one() -> Self {
        ComplexFloat::with_val(DEFAULT_PRECISION, 1, 0)
    }
}

// `{:#}` drops an exactly zero imaginary part
impl fmt::Display for ComplexFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() && self.im.is_zero() {
            return write!(f, "{}", format_float(&self.re));
        }
        write!(f, "{} + {}i", format_float(&self.re), format_float(&self.im))
    }
}

impl FromStr for ComplexFloat {
    type Err = SimpleError;

    /// Parse `"<re> + <im>i"`, `"<re> - <im>i"` or a bare real at the default precision
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(caps) = COMPLEX_FLOAT_RE.captures(s) else {
            bail!("invalid complex number {:?}", s);
        };

        let re = parse_float(&caps["re"], DEFAULT_PRECISION)?;
        let im = match caps.name("im") {
            Some(im) => {
                let value = parse_float(im.as_str(), DEFAULT_PRECISION)?;
                if &caps["sep"] == "-" {
                    -value
                } else {
                    value
                }
            }
            None => Float::new(DEFAULT_PRECISION),
        };

        Ok(ComplexFloat::new(re, im))
    }
}

#[cfg(test)]
mod complex_float_tests {
    use super::*;
    use float_cmp::approx_eq;

    fn c(re: f64, im: f64) -> ComplexFloat {
        ComplexFloat::from_f64(re, im)
    }

    fn c64(re: f64, im: f64) -> ComplexFloat {
        ComplexFloat::with_val(64, re, im)
    }

    fn assert_close(a: &ComplexFloat, b: &ComplexFloat) {
        assert!(
            approx_eq!(f64, a.re().to_f64(), b.re().to_f64(), epsilon = 1e-12),
            "re: {} vs {}",
            a,
            b
        );
        assert!(
            approx_eq!(f64, a.im().to_f64(), b.im().to_f64(), epsilon = 1e-12),
            "im: {} vs {}",
            a,
            b
        );
    }

    #[test]
    fn test_creation() {
        let z = c(3.0, 4.0);
        assert_eq!(*z.re(), 3.0);
        assert_eq!(*z.im(), 4.0);
        assert_eq!(z.prec(), (DEFAULT_PRECISION, DEFAULT_PRECISION));

        let w = ComplexFloat::new(Float::with_val(80, 1), Float::with_val(20, 2));
        assert_eq!(w.prec(), (80, 20));
    }

    #[test]
    fn test_arithmetic() {
        let z1 = c(1.0, 2.0);
        let z2 = c(3.0, 4.0);

        assert_eq!((&z1 + &z2).to_string(), "4 + 6i");
        assert_eq!((&z2 - &z1).to_string(), "2 + 2i");
        assert_eq!((&z1 * &z2).to_string(), "-5 + 10i");
        assert_eq!((-&z1).to_string(), "-1 + -2i");
        assert_eq!(c(4.0, 5.0).conj().to_string(), "4 + -5i");
    }

    #[test]
    fn test_assignment_operators() {
        let mut z = c(1.0, 2.0);
        let w = c(3.0, 4.0);

        z += &w;
        assert_eq!(z.to_string(), "4 + 6i");
        z -= &w;
        assert_eq!(z.to_string(), "1 + 2i");
        z *= &w;
        assert_eq!(z.to_string(), "-5 + 10i");
        z /= w;
        assert_eq!(z.to_string(), "1 + 2i");
    }

    #[test]
    fn test_div() {
        assert_eq!((c(4.0, 5.0) / c(2.0, 6.0)).to_string(), "0.95 + -0.35i");

        assert!((c(1.0, 1.0) / c(0.0, 0.0)).is_nan());
        assert!((c(0.0, 0.0) / c(0.0, 0.0)).is_nan());
    }

    #[test]
    fn test_mixed_precision_follows_left_operand() {
        let wide = c64(1.0, 1.0);
        let narrow = ComplexFloat::with_val(24, 3, 4);
        assert_eq!((&wide * &narrow).prec(), (64, 64));
        assert_eq!((&narrow + &wide).prec(), (24, 24));
    }

    #[test]
    fn test_abs() {
        let a = c(5.0, 5.0).abs();
        assert_eq!(a.to_string(), "7.071067812 + 0i");
        assert!(a.im().is_zero());
        assert_eq!(a.im().prec(), DEFAULT_PRECISION);

        let b = c(-3.0, -4.0).abs();
        assert_eq!(b.to_string(), "5 + 0i");
        assert!(!b.re().is_sign_negative());
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(c(5.0, 12.0).sqrt().to_string(), "3 + 2i");
        assert_eq!(c(5.0, -12.0).sqrt().to_string(), "3 + -2i");
        assert_eq!(c(4.0, 0.0).sqrt().to_string(), "2 + 0i");
        assert_eq!(c(-4.0, 0.0).sqrt().to_string(), "0 + 0i");

        let w = ComplexFloat::new(Float::with_val(64, 5), Float::with_val(32, 12));
        assert_eq!(w.sqrt().prec(), (64, 32));
    }

    #[test]
    fn test_arg() {
        assert!(c(0.0, 0.0).arg().re().is_infinite());
        assert_eq!(c(0.0, 1.0).arg().to_string(), "1.570796327 + 0i");
        assert_eq!(c(0.0, -2.0).arg().to_string(), "-1.570796327 + 0i");
        assert_eq!(c(1.0, 0.0).arg().to_string(), "0 + 0i");
        assert_eq!(c(1.0, 1.0).arg().to_string(), "0.7853981634 + 0i");
        assert_eq!(c(-1.0, 0.0).arg().to_string(), "3.141592654 + 0i");
        assert_eq!(c(-1.0, 1.0).arg().to_string(), "-0.7853981634 + 0i");
        assert!(c(f64::NAN, 1.0).arg().re().is_nan());
    }

    #[test]
    fn test_atan2_quadrants() {
        assert_eq!(c(1.0, 1.0).atan2().to_string(), "0.7853981634 + 0i");
        assert_eq!(c(-1.0, 1.0).atan2().to_string(), "2.35619449 + 0i");
        assert_eq!(c(-1.0, -1.0).atan2().to_string(), "-2.35619449 + 0i");
        assert_eq!(c(0.0, -1.0).atan2().to_string(), "-1.570796327 + 0i");
        assert_eq!(c(-1.0, 0.0).atan2().to_string(), "3.141592654 + 0i");
        assert_eq!(c(-2.0, 0.0).atan2().to_string(), "3.141592654 + 0i");
    }

    #[test]
    fn test_exp() {
        assert_eq!(c(1.0, 1.0).exp().to_string(), "1.46869394 + 2.287355287i");
        assert_eq!(c(0.0, 1.0).exp().to_string(), "0.5403023059 + 0.8414709848i");
        assert_eq!(c(1.0, 0.0).exp().to_string(), "2.718281828 + 0i");
        assert_eq!(c(1.0, 2.0).exp().to_string(), "-1.131204384 + 2.471726672i");
        assert_eq!(c(2.0, 1.0).exp().to_string(), "3.992324048 + 6.217676312i");
    }

    #[test]
    fn test_cos() {
        assert_eq!(c(1.0, 1.0).cos().to_string(), "0.8337300251 + -0.9888977058i");
        assert_eq!(c(0.0, 1.0).cos().to_string(), "1.543080635 + 0i");
        assert_eq!(c(1.0, 0.0).cos().to_string(), "0.5403023059 + 0i");
        assert_eq!(c(1.0, 2.0).cos().to_string(), "2.032723007 + -3.051897799i");
        assert_eq!(c(2.0, 1.0).cos().to_string(), "-0.6421481247 + -1.068607421i");
    }

    #[test]
    fn test_sin() {
        assert_eq!(c(1.0, 1.0).sin().to_string(), "1.298457581 + 0.6349639148i");
        assert_eq!(c(0.0, 1.0).sin().to_string(), "0 + 1.175201194i");
        assert_eq!(c(1.0, 0.0).sin().to_string(), "0.8414709848 + 0i");
        assert_eq!(c(1.0, 2.0).sin().to_string(), "3.165778513 + 1.959601041i");
        assert_eq!(c(2.0, 1.0).sin().to_string(), "1.403119251 + -0.489056259i");
    }

    #[test]
    fn test_tan() {
        assert_eq!(c(1.0, 1.0).tan().to_string(), "0.2717525853 + 1.083923327i");
        assert_eq!(c(0.0, 1.0).tan().to_string(), "0 + 0.761594156i");
        assert_eq!(c(1.0, 0.0).tan().to_string(), "1.557407725 + 0i");
        assert_eq!(c(1.0, 2.0).tan().to_string(), "0.03381282608 + 1.014793616i");
        assert_eq!(c(2.0, 1.0).tan().to_string(), "-0.2434582012 + 1.166736257i");
    }

    #[test]
    fn test_ln() {
        assert_eq!(c(1.0, 1.0).ln().to_string(), "0.3465735903 + 0.7853981634i");
        assert_eq!(c(1.0, 0.0).ln().to_string(), "0 + 0i");
        assert_eq!(c(0.0, 1.0).ln().to_string(), "0 + 1.570796327i");
        assert_eq!(c(1.0, 2.0).ln().to_string(), "0.8047189562 + 1.107148718i");
        assert_eq!(c(2.0, 1.0).ln().to_string(), "0.8047189562 + 0.463647609i");
        assert_eq!(c(-1.0, 0.0).ln().to_string(), "0 + 3.141592654i");

        let origin = c(0.0, 0.0).ln();
        assert!(origin.re().is_infinite());
        assert!(origin.re().is_sign_negative());
    }

    #[test]
    fn test_pow() {
        let cases = [
            ((2.0, 1.0), "-0.504824689 + 3.104144077i"),
            ((1.0, 2.0), "-0.2225171568 + 0.1007091311i"),
            ((0.0, 1.0), "0.2078795764 + 0i"),
            ((1.0, 0.0), "1 + 0i"),
            ((0.0, 0.0), "+Inf + 0i"),
        ];
        for ((re, im), expected) in cases {
            let z = c64(re, im);
            assert_eq!(z.pow(&z).to_string(), expected, "({re}, {im})");
        }
    }

    #[test]
    fn test_pow_real_exponent() {
        let z = c(2.0, 0.0).pow(&c(3.0, 0.0));
        assert_close(&z, &c(8.0, 0.0));
    }

    #[test]
    fn test_pow_negative_real_base() {
        // arg(-4) is atan(0 / -4) = -0, so the angle carries no half turn
        let r = c(-4.0, 0.0).pow(&c(0.5, 0.0));
        assert_close(&r, &c(2.0, 0.0));

        // arg(-1 + i) is atan(-1) = -π/4
        let s = c(-1.0, 1.0).pow(&c(0.5, 0.0));
        assert_close(&s, &c(1.0986841134678100, -0.45508986056222733));
    }

    #[test]
    fn test_pow_zero_base() {
        assert_eq!(c64(0.0, 0.0).pow(&c64(2.0, 0.0)).to_string(), "0 + 0i");
        assert_eq!(c64(0.0, 0.0).pow(&c64(0.5, 3.0)).to_string(), "0 + 0i");

        let narrow = ComplexFloat::new(Float::with_val(80, 0), Float::with_val(24, 0));
        let z = narrow.pow(&c(3.0, 0.0));
        assert!(z.is_zero());
        assert_eq!(z.prec(), (80, 24));
    }

    #[test]
    fn test_conj_involution() {
        for (re, im) in [(1.5, -2.25), (0.0, 0.0), (-3.0, 7.0)] {
            let z = c(re, im);
            assert_eq!(z.conj().conj(), z);
        }
    }

    #[test]
    fn test_exp_ln_round_trip() {
        for (re, im) in [(3.0, 4.0), (-3.0, 4.0), (-2.0, -1.0), (0.5, -0.25), (-1.0, 0.0)] {
            let z = c(re, im);
            assert_close(&z.ln().exp(), &z);
        }
    }

    #[test]
    fn test_mul_div_round_trip() {
        let z = c(1.25, -3.5);
        let w = c(-0.75, 2.0);
        assert_close(&((&z * &w) / &w), &z);
    }

    #[test]
    fn test_display_alternate() {
        assert_eq!(format!("{:#}", c(2.0, 0.0)), "2");
        assert_eq!(format!("{:#}", c(2.0, 1.0)), "2 + 1i");
        assert_eq!(format!("{}", c(2.0, 0.0)), "2 + 0i");
    }

    #[test]
    fn test_zero_one() {
        assert!(ComplexFloat::zero().is_zero());
        assert_eq!(ComplexFloat::one().to_string(), "1 + 0i");
        assert_eq!((c(2.0, 3.0) * ComplexFloat::one()).to_string(), "2 + 3i");
    }

    #[test]
    fn test_parse() {
        let z: ComplexFloat = "0.95 + -0.35i".parse().unwrap();
        assert_eq!(z.to_string(), "0.95 + -0.35i");

        let w: ComplexFloat = "3 - 4i".parse().unwrap();
        assert_eq!(w, c(3.0, -4.0));

        let r: ComplexFloat = "-2.5".parse().unwrap();
        assert_eq!(r, c(-2.5, 0.0));

        let inf: ComplexFloat = "+Inf + 0i".parse().unwrap();
        assert!(inf.re().is_infinite());

        assert!("3 + 4".parse::<ComplexFloat>().is_err());
        assert!("x + 4i".parse::<ComplexFloat>().is_err());
    }
}
