// src/core/num.rs

/// Lenient numeric coercion for noisy cell text: strip everything except
/// digits, '.', '+', '-', then parse. Empty after stripping, unparseable,
/// or non-finite all mean "no value", never zero.
pub fn lenient_number(t: &str) -> Option<f64> {
    let cleaned: String = t
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labelled_numbers() {
        assert_eq!(lenient_number("Proj: 24.5"), Some(24.5));
        assert_eq!(lenient_number("  12 pts "), Some(12.0));
        assert_eq!(lenient_number("+8"), Some(8.0));
    }

    #[test]
    fn absent_is_none_not_zero() {
        assert_eq!(lenient_number(""), None);
        assert_eq!(lenient_number("N/A"), None);
        assert_eq!(lenient_number("TBD"), None);
    }

    #[test]
    fn garbage_after_strip_is_none() {
        assert_eq!(lenient_number("1.2.3"), None);
        assert_eq!(lenient_number("--"), None);
        assert_eq!(lenient_number("."), None);
    }
}
