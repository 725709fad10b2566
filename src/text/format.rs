//! Fixed-width `%g`-style float formatting for table cells

/// Format `value` with `precision` significant digits, right-aligned to `width`
///
/// Follows C/Go `%W.Pg` rules: trailing zeros are dropped, and scientific
/// notation (`1.5e+06`) is used when the decimal exponent is below -4 or at
/// least the precision.
pub fn format_g(value: f64, width: usize, precision: usize) -> String {
    format!("{:>width$}", format_g_unpadded(value, precision), width = width)
}

/// `%g` formatting without padding
pub fn format_g_unpadded(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);

    // Let the standard formatter do the rounding, then read back the digits
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let mantissa = trim_fraction(mantissa);
    let digits = mantissa.bytes().filter(u8::is_ascii_digit).count() as i32;
    let point = exp + 1;

    let mut eprec = precision as i32;
    if eprec > digits && digits >= point {
        eprec = digits;
    }

    if exp < -4 || exp >= eprec {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exp.abs());
    }

    let decimals = if precision as i32 > point {
        (digits - point).max(0)
    } else {
        0
    };
    format!("{:.*}", decimals as usize, value)
}

/// Drop trailing zeros (and a dangling '.') from a decimal mantissa
fn trim_fraction(mantissa: &str) -> &str {
    if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(format_g_unpadded(1.0, 8), "1");
        assert_eq!(format_g_unpadded(1234.5, 8), "1234.5");
        assert_eq!(format_g_unpadded(-0.25, 8), "-0.25");
        assert_eq!(format_g_unpadded(1e6, 8), "1000000");
    }

    #[test]
    fn test_rounds_to_precision() {
        assert_eq!(format_g_unpadded(3.14159265358979, 8), "3.1415927");
        assert_eq!(format_g_unpadded(2.0 / 3.0, 3), "0.667");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(format_g_unpadded(1.5e10, 8), "1.5e+10");
        assert_eq!(format_g_unpadded(1e-5, 8), "1e-05");
        assert_eq!(format_g_unpadded(-6.02e23, 8), "-6.02e+23");
        assert_eq!(format_g_unpadded(1.23456789e-7, 3), "1.23e-07");
    }

    #[test]
    fn test_small_fixed() {
        assert_eq!(format_g_unpadded(0.0001, 8), "0.0001");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_g_unpadded(0.0, 8), "0");
        assert_eq!(format_g_unpadded(f64::NAN, 8), "NaN");
        assert_eq!(format_g_unpadded(f64::INFINITY, 8), "+Inf");
        assert_eq!(format_g_unpadded(f64::NEG_INFINITY, 8), "-Inf");
    }

    #[test]
    fn test_padding() {
        assert_eq!(format_g(1.5, 13, 8), "          1.5");
        assert_eq!(format_g(1.5, 13, 8).len(), 13);
    }
}
