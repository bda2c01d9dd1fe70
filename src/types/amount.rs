use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use std::str::FromStr;

const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Parses amount text entered by the user into a `Decimal`.
///
/// Surrounding whitespace and a leading `+` are accepted. The sign is not checked here,
/// negative amounts are rejected when the store validates the record.
pub fn parse_amount(value: &str) -> Result<Decimal, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::Empty);
    }

    let unsigned = value.strip_prefix('+').unwrap_or(value);

    Decimal::from_str(unsigned).map_err(|error| {
        AmountError::InvalidFormat(format!("Value '{value}' is not a number: {error}"))
    })
}

/// Formats an amount for display with two fractional digits.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(DISPLAY_DECIMAL_PLACES))
}
