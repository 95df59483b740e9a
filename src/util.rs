use rug::{Float, Rational};
use simple_error::{SimpleError, bail};

/// Significant decimal digits used when rendering a float component
pub const DISPLAY_DIGITS: usize = 10;

/// Render a float like `%.10g`: trailing zeros dropped, scientific notation only for
/// decimal exponents outside `[-4, DISPLAY_DIGITS)`.
pub fn format_float(value: &Float) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-Inf" } else { "+Inf" }.to_string();
    }
    if value.is_zero() {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // value = 0.digits * 10^exp
    let (negative, digits, exp) = value.to_sign_string_exp(10, Some(DISPLAY_DIGITS));
    let exp = exp.unwrap_or(0) - 1;
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut out = String::with_capacity(DISPLAY_DIGITS + 8);
    if negative {
        out.push('-');
    }

    if exp < -4 || exp >= DISPLAY_DIGITS as i32 {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exp < 0 { '-' } else { '+' };
        out.push_str(&format!("e{}{:02}", sign, exp.abs()));
    } else if exp < 0 {
        out.push_str("0.");
        for _ in 0..(-exp - 1) {
            out.push('0');
        }
        out.push_str(digits);
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            out.push_str(digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }

    out
}

/// Render a rational as `numerator/denominator`, always printing the denominator
pub fn format_rational(value: &Rational) -> String {
    format!("{}/{}", value.numer(), value.denom())
}

/// Parse one float component at `prec` bits, accepting the `±Inf` and `NaN` renderings
pub fn parse_float(text: &str, prec: u32) -> Result<Float, SimpleError> {
    let text = text.trim();
    let (negative, body) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if body.eq_ignore_ascii_case("inf") {
        let value = Float::with_val(prec, rug::float::Special::Infinity);
        return Ok(if negative { -value } else { value });
    }
    if body.eq_ignore_ascii_case("nan") {
        return Ok(Float::with_val(prec, rug::float::Special::Nan));
    }

    match Float::parse(text) {
        Ok(parsed) => Ok(Float::with_val(prec, parsed)),
        Err(err) => bail!("invalid float component {:?}: {}", text, err),
    }
}

/// Parse one rational component, `n/d` or a bare integer
pub fn parse_rational(text: &str) -> Result<Rational, SimpleError> {
    let text = text.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    match text.parse::<Rational>() {
        Ok(value) => Ok(value),
        Err(err) => bail!("invalid rational component {:?}: {}", text, err),
    }
}

/// Clamp a requested precision into the range the float primitive accepts
pub fn clamp_prec(prec: u32) -> u32 {
    prec.clamp(rug::float::prec_min(), rug::float::prec_max())
}
