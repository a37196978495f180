//! Classification of raw cell values as missing or numeric.

/// Tokens that mark a value as missing, compared after trimming and
/// lowercasing.
pub const MISSING_TOKENS: [&str; 6] = ["", "na", "n/a", "null", "none", "nan"];

/// Check if a raw value counts as missing.
///
/// Absent cells are missing, as is any value that trims to one of
/// [`MISSING_TOKENS`] regardless of case.
pub fn is_missing(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(raw) => {
            let trimmed = raw.trim();
            MISSING_TOKENS
                .iter()
                .any(|token| trimmed.eq_ignore_ascii_case(token))
        }
    }
}

/// Try to parse a raw value as a floating-point number.
///
/// Surrounding whitespace is ignored. Returns `None` for anything the
/// standard float parser rejects.
pub fn try_parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_missing() {
        assert!(is_missing(None));
    }

    #[test]
    fn test_missing_tokens_any_case() {
        for raw in ["", "  ", "NA", "na", "N/A", "n/a", "NULL", "Null", "None", "NaN", " nan "] {
            assert!(is_missing(Some(raw)), "{raw:?} should be missing");
        }
    }

    #[test]
    fn test_present_values() {
        for raw in ["0", "a", "nana", "-", "nil", "n.a."] {
            assert!(!is_missing(Some(raw)), "{raw:?} should be present");
        }
    }

    #[test]
    fn test_parse_decimal_syntax() {
        assert_eq!(try_parse_number("42"), Some(42.0));
        assert_eq!(try_parse_number(" -3.5 "), Some(-3.5));
        assert_eq!(try_parse_number("+1e3"), Some(1000.0));
        assert_eq!(try_parse_number(".5"), Some(0.5));
        assert_eq!(try_parse_number("2.5E-1"), Some(0.25));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(try_parse_number("abc"), None);
        assert_eq!(try_parse_number(""), None);
        assert_eq!(try_parse_number("1,000"), None);
        assert_eq!(try_parse_number("12abc"), None);
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(try_parse_number("inf"), Some(f64::INFINITY));
        assert_eq!(try_parse_number("-Infinity"), Some(f64::NEG_INFINITY));
    }
}
