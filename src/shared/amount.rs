//! Parsing of user-entered dollar amounts.

use crate::error::LocalValidationError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a free-form amount string into a positive [`Decimal`].
///
/// Accepts an optional leading `$` and comma grouping (`"2,000"` → 2000).
/// Rejects anything non-numeric and any value ≤ 0; callers use this as the
/// gate before an order request is ever constructed.
pub fn parse_amount(input: &str) -> Result<Decimal, LocalValidationError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(LocalValidationError::NotANumber(input.to_string()));
    }

    let value = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| LocalValidationError::NotANumber(input.to_string()))?;

    if value <= Decimal::ZERO {
        return Err(LocalValidationError::NotPositive);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_amount() {
        assert_eq!(parse_amount("2000").unwrap(), Decimal::from(2000));
    }

    #[test]
    fn test_comma_grouping() {
        assert_eq!(parse_amount("2,000").unwrap(), Decimal::from(2000));
        assert_eq!(parse_amount("1,250,000.50").unwrap(), Decimal::from_str("1250000.50").unwrap());
    }

    #[test]
    fn test_dollar_prefix_and_whitespace() {
        assert_eq!(parse_amount(" $5,000 ").unwrap(), Decimal::from(5000));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_amount("1e3").unwrap(), Decimal::from(1000));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(
            parse_amount("abc"),
            Err(LocalValidationError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_amount(""),
            Err(LocalValidationError::NotANumber("".to_string()))
        );
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        assert_eq!(parse_amount("0"), Err(LocalValidationError::NotPositive));
        assert_eq!(parse_amount("-5"), Err(LocalValidationError::NotPositive));
    }
}
