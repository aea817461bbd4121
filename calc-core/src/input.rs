//! Parsing of numeric text typed into calculator fields.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when field text cannot be read as a number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("no value entered")]
    Empty,

    #[error("invalid number '{input}'")]
    Invalid { input: String },
}

/// Normalizes field text: trims whitespace and, when a comma is present,
/// treats it as the decimal mark and dots as thousands separators.
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    }
}

/// Parses field text into a [`Decimal`].
///
/// Accepts both `1518.50` and the Brazilian `1.518,50`. Sign is preserved so
/// callers can report negative values with their own message.
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::parse_amount;
///
/// assert_eq!(parse_amount("1.518,50").unwrap(), dec!(1518.50));
/// assert_eq!(parse_amount(" 2000 ").unwrap(), dec!(2000));
/// assert!(parse_amount("R$ 10").is_err());
/// ```
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    normalized.parse().map_err(|e: rust_decimal::Error| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_dot_decimal_mark() {
        assert_eq!(parse_amount("1518.00").unwrap(), dec!(1518.00));
    }

    #[test]
    fn parse_amount_accepts_comma_decimal_mark() {
        assert_eq!(parse_amount("2793,88").unwrap(), dec!(2793.88));
        assert_eq!(parse_amount("8.154,41").unwrap(), dec!(8154.41));
        assert_eq!(parse_amount("1.000.000,5").unwrap(), dec!(1000000.5));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  42  ").unwrap(), dec!(42));
    }

    #[test]
    fn parse_amount_keeps_sign() {
        assert_eq!(parse_amount("-3,5").unwrap(), dec!(-3.5));
    }

    #[test]
    fn parse_amount_empty_is_error() {
        assert_eq!(parse_amount(""), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("   "), Err(ParseAmountError::Empty));
    }

    #[test]
    fn parse_amount_rejects_text() {
        assert_eq!(
            parse_amount("abc"),
            Err(ParseAmountError::Invalid {
                input: "abc".to_string()
            })
        );
    }

    #[test]
    fn parse_amount_rejects_trailing_garbage() {
        assert!(parse_amount("12abc").is_err());
        assert!(parse_amount("1.2.3").is_err());
    }
}
