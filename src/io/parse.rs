//! Permissive numeric conversions for input tokens.
//!
//! Input files are not validated field by field. Each token is read for its
//! longest leading numeric prefix and anything that does not start with a
//! number converts to zero:
//!
//! - `"12.7"` as a label is `12`, `"abc"` is `0`
//! - `"12.5x"` as a feature is `12.5`, `"x"` is `0.0`
//!
//! Malformed tokens are therefore silently read as zero. Callers that need
//! strict parsing should not use these functions.

/// Parse the leading integer prefix of `token`, or `0` if there is none.
///
/// Leading whitespace and a single `+`/`-` sign are accepted. Values outside
/// the `i64` range saturate.
pub fn parse_int_prefix(token: &str) -> i64 {
    let s = token.trim_start();
    let bytes = s.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign_len..]);
    if digits == 0 {
        return 0;
    }

    let prefix = &s[..sign_len + digits];
    match prefix.parse::<i64>() {
        Ok(v) => v,
        // Only overflow can fail here: the prefix is sign + digits.
        Err(_) if bytes[0] == b'-' => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Parse the leading floating-point prefix of `token`, or `0.0` if there is none.
///
/// Accepted prefix: `[sign] digits [. digits] [(e|E) [sign] digits]` with at least
/// one mantissa digit, or one of `inf`, `infinity`, `nan` (any case). An exponent
/// marker without digits is not part of the prefix (`"1e"` is `1.0`).
pub fn parse_float_prefix(token: &str) -> f64 {
    let s = token.trim_start();
    let bytes = s.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if let Some(v) = parse_special(&s[sign_len..]) {
        return if bytes[0] == b'-' { -v } else { v };
    }

    let mut end = sign_len;
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn parse_special(s: &str) -> Option<f64> {
    let lower: String = s.chars().take(8).collect::<String>().to_ascii_lowercase();
    if lower.starts_with("infinity") || lower.starts_with("inf") {
        Some(f64::INFINITY)
    } else if lower.starts_with("nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix_truncates_and_defaults_to_zero() {
        assert_eq!(parse_int_prefix("42"), 42);
        assert_eq!(parse_int_prefix("12.7"), 12);
        assert_eq!(parse_int_prefix("-3x"), -3);
        assert_eq!(parse_int_prefix("  +7"), 7);
        assert_eq!(parse_int_prefix("abc"), 0);
        assert_eq!(parse_int_prefix("-"), 0);
        assert_eq!(parse_int_prefix(""), 0);
    }

    #[test]
    fn int_prefix_saturates_on_overflow() {
        assert_eq!(parse_int_prefix("99999999999999999999"), i64::MAX);
        assert_eq!(parse_int_prefix("-99999999999999999999"), i64::MIN);
    }

    #[test]
    fn float_prefix_reads_leading_number() {
        assert_eq!(parse_float_prefix("12.5x"), 12.5);
        assert_eq!(parse_float_prefix(" -0.25"), -0.25);
        assert_eq!(parse_float_prefix(".5"), 0.5);
        assert_eq!(parse_float_prefix("3."), 3.0);
        assert_eq!(parse_float_prefix("1e3"), 1000.0);
        assert_eq!(parse_float_prefix("2.5E-1kg"), 0.25);
        assert_eq!(parse_float_prefix("1e"), 1.0);
        assert_eq!(parse_float_prefix("1e+"), 1.0);
    }

    #[test]
    fn float_prefix_defaults_to_zero() {
        assert_eq!(parse_float_prefix("x"), 0.0);
        assert_eq!(parse_float_prefix("."), 0.0);
        assert_eq!(parse_float_prefix("-"), 0.0);
        assert_eq!(parse_float_prefix(""), 0.0);
    }

    #[test]
    fn float_prefix_special_words() {
        assert_eq!(parse_float_prefix("inf"), f64::INFINITY);
        assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float_prefix("NaN").is_nan());
    }
}
