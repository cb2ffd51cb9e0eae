//! Currency registry and money formatting.

pub mod error;
pub mod format;
pub mod registry;

#[cfg(test)]
mod props;

pub use error::FormatError;
pub use format::{MoneyFormatter, format_money, format_money_str, format_number, parse_amount};
pub use registry::{CurrencyDescriptor, CurrencyLookup, all_currencies, find_currency, lookup_currency};
