//! Input parsing and display formatting for the quote printer.

use rust_decimal::Decimal;
use thiserror::Error;

use mortgage_core::calculations::common::round_half_up;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses a command-line argument into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and surrounding
/// whitespace.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = s.trim().replace(',', "");
    normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Formats a dollar amount with two decimals and comma-grouped thousands,
/// e.g. `$197,600.00` or `-$50,000.00`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let cents = format!("{:.2}", rounded.abs());
    let (whole, fraction) = match cents.split_once('.') {
        Some(parts) => parts,
        None => (cents.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if negative {
        format!("-${grouped}.{fraction}")
    } else {
        format!("${grouped}.{fraction}")
    }
}

/// Formats a percentage trimmed to at most two decimals, without a unit,
/// e.g. `5` or `6.67`.
pub fn format_percent(value: Decimal) -> String {
    round_half_up(value).normalize().to_string()
}
