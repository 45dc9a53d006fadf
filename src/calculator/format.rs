//! Number formatting and parsing for operand text.
//!
//! Operands are kept as text while they are typed. These helpers convert
//! between that text and `f64`, keeping at most [`MAX_DECIMAL_PLACES`]
//! fractional digits and never emitting trailing zeros.

/// Decimal places kept on display and used as the fixed-point scale.
pub const MAX_DECIMAL_PLACES: usize = 8;

/// Longest operand that can be typed digit by digit.
pub const MAX_OPERAND_LEN: usize = 15;

/// Display text shown after a division by zero.
pub const ERROR_TOKEN: &str = "Error";

/// Magnitudes at or above this would print in exponential form.
const EXPONENTIAL_UPPER: f64 = 1e21;

/// Non-zero magnitudes below this would print in exponential form.
const EXPONENTIAL_LOWER: f64 = 1e-6;

/// Format a number as operand text.
///
/// - Non-finite values become [`ERROR_TOKEN`].
/// - Negative zero prints as `"0"`.
/// - Very large or very small magnitudes are rendered in fixed notation with
///   [`MAX_DECIMAL_PLACES`] digits (rounded), then trailing zeros are stripped.
/// - Everything else uses the shortest round-trip text, with the fractional
///   part truncated (not rounded) to [`MAX_DECIMAL_PLACES`] digits.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TOKEN.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(EXPONENTIAL_LOWER..EXPONENTIAL_UPPER).contains(&magnitude) {
        let fixed = format!("{:.*}", MAX_DECIMAL_PLACES, value);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        return match trimmed {
            "-0" => "0".to_string(),
            other => other.to_string(),
        };
    }

    let text = value.to_string();
    let Some((integer, decimal)) = text.split_once('.') else {
        return text;
    };

    // Truncate before stripping zeros so a cut never leaves trailing zeros.
    let limit = decimal.len().min(MAX_DECIMAL_PLACES);
    let decimal = decimal[..limit].trim_end_matches('0');
    if decimal.is_empty() {
        return integer.to_string();
    }

    format!("{}.{}", integer, decimal)
}

/// Parse operand text into a finite number.
///
/// Returns `None` for empty text, a lone sign or point, the error token,
/// and anything else that is not a plain decimal number.
pub fn parse_operand(text: &str) -> Option<f64> {
    let plain = text
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '-');
    if !plain {
        return None;
    }

    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_unchanged() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(123456789012345.0), "123456789012345");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1e-12), "0");
    }

    #[test]
    fn test_decimals_truncated_not_rounded() {
        assert_eq!(format_number(1.0 / 3.0), "0.33333333");
        assert_eq!(format_number(2.0 / 3.0), "0.66666666");
        assert_eq!(format_number(-0.123456789), "-0.12345678");
        assert_eq!(format_number(0.30000000000000004), "0.3");
    }

    #[test]
    fn test_no_trailing_zeros() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(1.000000001), "1");
    }

    #[test]
    fn test_tiny_values_fixed_notation() {
        assert_eq!(format_number(1e-7), "0.0000001");
        assert_eq!(format_number(-5e-7), "-0.0000005");
        assert_eq!(format_number(1e-9), "0");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_huge_values_fixed_notation() {
        assert_eq!(format_number(1e21), "1000000000000000000000");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number(f64::NAN), ERROR_TOKEN);
        assert_eq!(format_number(f64::INFINITY), ERROR_TOKEN);
        assert_eq!(format_number(f64::NEG_INFINITY), ERROR_TOKEN);
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("0"), Some(0.0));
        assert_eq!(parse_operand("12.5"), Some(12.5));
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand("-0.25"), Some(-0.25));
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand(ERROR_TOKEN), None);
        assert_eq!(parse_operand("inf"), None);
        assert_eq!(parse_operand("1e5"), None);
    }

    #[test]
    fn test_round_trip_within_precision() {
        for value in [0.5, 1.25, -3.75, 0.12345678, 99999.00000001, -0.00000001, 1234567.5] {
            let text = format_number(value);
            assert_eq!(parse_operand(&text), Some(value), "{value} -> {text}");
            assert!(!text.contains('.') || !text.ends_with('0'), "{text}");
        }
    }
}
