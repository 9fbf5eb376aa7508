//! Raw field text to validated number.
//!
//! Parsing follows a browser's `parseFloat`: leading whitespace (including the
//! byte order mark U+FEFF) is skipped and
//! the longest decimal prefix (`[+-]digits[.digits][e[+-]digits]`) is read, so
//! `"12cm"` yields 12 while `"cm12"` is not a number.

use segitiga_types::{Locale, Messages, PositiveNumber, ValidationResult};

/// Validates raw field text into a [`PositiveNumber`].
#[derive(Debug, Clone, Copy)]
pub struct InputValidator {
    messages: &'static Messages,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl InputValidator {
    /// Creates a validator reporting failures in `locale`.
    pub const fn new(locale: Locale) -> Self {
        Self { messages: locale.messages() }
    }

    /// Validates one field value.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        match parse_decimal(raw).and_then(PositiveNumber::new) {
            Some(value) => ValidationResult::Valid(value),
            None => ValidationResult::Invalid { reason: self.messages.invalid_input.to_string() },
        }
    }
}

/// Validates `raw` with the default (Indonesian) messages.
pub fn validate(raw: &str) -> ValidationResult {
    InputValidator::default().validate(raw)
}

/// Parses the leading decimal number of `raw`, ignoring anything after it.
///
/// Returns `None` when `raw` has no numeric prefix. Overflowing exponents yield
/// infinities, which the caller rejects.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let text = raw.trim_start_matches(is_js_whitespace);
    let prefix = &text[..numeric_prefix_len(text.as_bytes())?];
    prefix.parse::<f64>().ok()
}

/// JavaScript's WhiteSpace and LineTerminator sets. Unicode White_Space lacks
/// U+FEFF and adds U+0085, which `parseFloat` does not skip.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn numeric_prefix_len(bytes: &[u8]) -> Option<usize> {
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut mantissa_digits = int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_signed_decimals() {
        assert_eq!(parse_decimal("3.5"), Some(3.5));
        assert_eq!(parse_decimal("+4"), Some(4.0));
        assert_eq!(parse_decimal("-5"), Some(-5.0));
        assert_eq!(parse_decimal(".25"), Some(0.25));
        assert_eq!(parse_decimal("7."), Some(7.0));
    }

    #[test]
    fn reads_only_the_numeric_prefix() {
        assert_eq!(parse_decimal("  12cm"), Some(12.0));
        assert_eq!(parse_decimal("1.5.3"), Some(1.5));
        assert_eq!(parse_decimal("2e3"), Some(2000.0));
        assert_eq!(parse_decimal("2e"), Some(2.0));
        assert_eq!(parse_decimal("2e+"), Some(2.0));
        assert_eq!(parse_decimal("1,5"), Some(1.0));
    }

    #[test]
    fn skips_byte_order_mark_like_other_whitespace() {
        assert_eq!(parse_decimal("\u{FEFF}4"), Some(4.0));
        assert_eq!(parse_decimal("\u{FEFF} \u{A0}\t2.5"), Some(2.5));
        assert!(validate("\u{FEFF}4").is_valid());
        assert_eq!(parse_decimal("\u{85}4"), None);
    }

    #[test]
    fn rejects_text_without_numeric_prefix() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("Infinity"), None);
    }

    #[test]
    fn overflow_is_rejected_as_non_finite() {
        assert!(!validate("1e400").is_valid());
    }

    #[test]
    fn negative_zero_is_not_positive() {
        assert!(!validate("-0").is_valid());
    }

    #[test]
    fn english_validator_uses_english_message() {
        let result = InputValidator::new(Locale::En).validate("x");
        assert_eq!(result.reason(), Some("Input must be a positive number."));
    }
}
