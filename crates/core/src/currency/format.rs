//! Money formatting.
//!
//! CRITICAL: Amounts are `Decimal` end to end. Rounding uses half away from
//! zero, which is what people expect to see on a price tag.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use webfuncs_shared::Position;
use webfuncs_shared::config::MoneyConfig;

use super::error::FormatError;
use super::registry::{CurrencyDescriptor, lookup_currency};

/// Currency code used when the caller passes an empty one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Formats `amount` in the currency identified by `code`.
///
/// The label is the currency symbol when `use_symbol` is set, otherwise the
/// code exactly as the caller spelled it. An empty `code` means `USD`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use webfuncs_core::currency::format_money;
/// use webfuncs_shared::Position;
///
/// let text = format_money(dec!(1234.5), "usd", true, Position::Left).unwrap();
/// assert_eq!(text, "$1,234.50");
/// ```
pub fn format_money(
    amount: Decimal,
    code: &str,
    use_symbol: bool,
    position: Position,
) -> Result<String, FormatError> {
    let code = if code.is_empty() { DEFAULT_CURRENCY } else { code };

    let descriptor = lookup_currency(Some(code.to_ascii_uppercase().as_str()))
        .single()
        .ok_or_else(|| FormatError::UnknownCurrency(code.to_string()))?;

    let label = if use_symbol { descriptor.symbol } else { code };
    let number = format_number(amount, descriptor);

    Ok(position.compose(label, &number))
}

/// Text-boundary variant of [`format_money`].
///
/// `amount` goes through [`parse_amount`] and `position` through
/// [`Position::from_name`], so an empty position means `left_space` and an
/// unknown one means `left`.
pub fn format_money_str(
    amount: &str,
    code: &str,
    use_symbol: bool,
    position: &str,
) -> Result<String, FormatError> {
    let amount = parse_amount(amount)?;
    format_money(amount, code, use_symbol, Position::from_name(position))
}

/// Parses an amount, treating blank input as zero.
///
/// Plain decimal and scientific notation are accepted; anything else is an
/// [`FormatError::InvalidAmount`].
pub fn parse_amount(raw: &str) -> Result<Decimal, FormatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| FormatError::InvalidAmount(raw.to_string()))
}

/// Renders `amount` with the descriptor's decimals and separators.
#[must_use]
pub fn format_number(amount: Decimal, descriptor: &CurrencyDescriptor) -> String {
    let rounded =
        amount.round_dp_with_strategy(descriptor.decimals, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.*}", descriptor.decimals as usize, rounded.abs());

    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(integer, descriptor.thousand_separator));

    if let Some(fraction) = fraction.filter(|_| descriptor.decimals > 0) {
        out.push_str(descriptor.decimal_separator);
        out.push_str(fraction);
    }

    out
}

fn group_thousands(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Formats money with defaults taken from configuration.
#[derive(Debug, Clone)]
pub struct MoneyFormatter {
    default_currency: String,
    use_symbol: bool,
    position: Position,
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::new(&MoneyConfig::default())
    }
}

impl MoneyFormatter {
    /// Creates a formatter from the money section of the configuration.
    #[must_use]
    pub fn new(config: &MoneyConfig) -> Self {
        Self {
            default_currency: config.default_currency.clone(),
            use_symbol: config.use_symbol,
            position: config.position,
        }
    }

    /// Returns the configured default currency code.
    #[must_use]
    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    /// Formats `amount` in the default currency.
    pub fn format(&self, amount: Decimal) -> Result<String, FormatError> {
        self.format_in(amount, None)
    }

    /// Formats `amount` in `code`, or the default currency when `None`.
    pub fn format_in(&self, amount: Decimal, code: Option<&str>) -> Result<String, FormatError> {
        let code = code.unwrap_or(&self.default_currency);
        format_money(amount, code, self.use_symbol, self.position)
    }

    /// Overrides the symbol flag and position for a single call.
    pub fn format_with(
        &self,
        amount: Decimal,
        code: Option<&str>,
        use_symbol: Option<bool>,
        position: Option<Position>,
    ) -> Result<String, FormatError> {
        format_money(
            amount,
            code.unwrap_or(&self.default_currency),
            use_symbol.unwrap_or(self.use_symbol),
            position.unwrap_or(self.position),
        )
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
