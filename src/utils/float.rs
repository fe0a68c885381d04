//! Float formatting compatible with Python's `repr(float)`.
//!
//! Generated scripts are Python, and delay values have always been written
//! the way Python prints them: shortest round-trip digits, a trailing `.0`
//! for integral values and exponent notation outside `[1e-4, 1e16)`.

/// Format `value` as Python's `repr(value)` would.
///
/// # Examples
/// ```
/// use automininet::utils::float::format_python_float;
///
/// assert_eq!(format_python_float(1500.0), "1500.0");
/// assert_eq!(format_python_float(0.5), "0.5");
/// assert_eq!(format_python_float(1e-5), "1e-05");
/// assert_eq!(format_python_float(1e16), "1e+16");
/// ```
pub fn format_python_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e-7"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        if exponent < 0 {
            let zeros = "0".repeat((-exponent - 1) as usize);
            format!("{}0.{}{}", sign, zeros, digits)
        } else {
            let point = exponent as usize + 1;
            if digits.len() > point {
                format!("{}{}.{}", sign, &digits[..point], &digits[point..])
            } else {
                format!("{}{}{}.0", sign, digits, "0".repeat(point - digits.len()))
            }
        }
    } else {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits
        };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}e{}{:02}", sign, mantissa, exponent_sign, exponent.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_python_float(0.5640187533), "0.5640187533");
        assert_eq!(format_python_float(12.25), "12.25");
        assert_eq!(format_python_float(1.0), "1.0");
        assert_eq!(format_python_float(10000.0), "10000.0");
        assert_eq!(format_python_float(0.0001), "0.0001");
        assert_eq!(format_python_float(-3.5), "-3.5");
        assert_eq!(format_python_float(2499.8999999999996), "2499.8999999999996");
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(format_python_float(0.00001), "1e-05");
        assert_eq!(format_python_float(0.000012345), "1.2345e-05");
        assert_eq!(format_python_float(1e16), "1e+16");
        assert_eq!(format_python_float(-2.5e20), "-2.5e+20");
        assert_eq!(format_python_float(1e100), "1e+100");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_python_float(0.0), "0.0");
        assert_eq!(format_python_float(-0.0), "-0.0");
        assert_eq!(format_python_float(f64::NAN), "nan");
        assert_eq!(format_python_float(f64::INFINITY), "inf");
        assert_eq!(format_python_float(f64::NEG_INFINITY), "-inf");
    }
}
