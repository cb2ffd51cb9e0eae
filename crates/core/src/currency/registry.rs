//! Fixed table of currency formatting rules.
//!
//! The table is built once on first access and never mutated afterwards, so it
//! can be read from any thread without synchronization.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

/// Formatting metadata for one ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyDescriptor {
    /// Uppercase three-letter code.
    pub code: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Name of the major denomination.
    pub major_unit: &'static str,
    /// Name of the minor denomination (empty when there is none in common use).
    pub minor_unit: &'static str,
    /// Display glyph or short code.
    pub symbol: &'static str,
    /// Number of fractional digits to render.
    pub decimals: u32,
    /// Separator between integer and fractional parts (empty when `decimals` is 0).
    pub decimal_separator: &'static str,
    /// Separator between groups of three integer digits.
    pub thousand_separator: &'static str,
}

macro_rules! currency {
    ($code:literal, $name:literal, $major:literal, $minor:literal, $symbol:literal, $decimals:literal, $dec_sep:literal, $thou_sep:literal) => {
        CurrencyDescriptor {
            code: $code,
            name: $name,
            major_unit: $major,
            minor_unit: $minor,
            symbol: $symbol,
            decimals: $decimals,
            decimal_separator: $dec_sep,
            thousand_separator: $thou_sep,
        }
    };
}

const CURRENCIES: &[CurrencyDescriptor] = &[
    currency!("AED", "United Arab Emirates Dirham", "Dirham", "Fils", "د.إ", 2, ".", ","),
    currency!("AUD", "Australian Dollar", "Dollar", "Cent", "A$", 2, ".", ","),
    currency!("BRL", "Brazilian Real", "Real", "Centavo", "R$", 2, ",", "."),
    currency!("CAD", "Canadian Dollar", "Dollar", "Cent", "C$", 2, ".", ","),
    currency!("CHF", "Swiss Franc", "Franc", "Rappen", "CHF", 2, ".", "'"),
    currency!("CNY", "Chinese Yuan Renminbi", "Yuan", "Fen", "¥", 2, ".", ","),
    currency!("CZK", "Czech Koruna", "Koruna", "Haléř", "Kč", 2, ",", " "),
    currency!("DKK", "Danish Krone", "Krone", "Øre", "kr.", 2, ",", "."),
    currency!("EUR", "Euro", "Euro", "Cent", "€", 2, ".", ","),
    currency!("GBP", "British Pound Sterling", "Pound", "Penny", "£", 2, ".", ","),
    currency!("HKD", "Hong Kong Dollar", "Dollar", "Cent", "HK$", 2, ".", ","),
    currency!("IDR", "Indonesian Rupiah", "Rupiah", "Sen", "Rp", 2, ",", "."),
    currency!("ILS", "Israeli New Shekel", "Shekel", "Agora", "₪", 2, ".", ","),
    currency!("INR", "Indian Rupee", "Rupee", "Paisa", "₹", 2, ".", ","),
    currency!("JPY", "Japanese Yen", "Yen", "", "¥", 0, "", ","),
    currency!("KRW", "South Korean Won", "Won", "", "₩", 0, "", ","),
    currency!("MXN", "Mexican Peso", "Peso", "Centavo", "$", 2, ".", ","),
    currency!("NGN", "Nigerian Naira", "Naira", "Kobo", "₦", 2, ".", ","),
    currency!("NOK", "Norwegian Krone", "Krone", "Øre", "kr", 2, ",", " "),
    currency!("NZD", "New Zealand Dollar", "Dollar", "Cent", "NZ$", 2, ".", ","),
    currency!("PLN", "Polish Zloty", "Zloty", "Grosz", "zł", 2, ",", " "),
    currency!("RUB", "Russian Ruble", "Ruble", "Kopek", "₽", 2, ",", " "),
    currency!("SEK", "Swedish Krona", "Krona", "Öre", "kr", 2, ",", " "),
    currency!("SGD", "Singapore Dollar", "Dollar", "Cent", "S$", 2, ".", ","),
    currency!("TRY", "Turkish Lira", "Lira", "Kuruş", "₺", 2, ",", "."),
    currency!("TWD", "New Taiwan Dollar", "Dollar", "Cent", "NT$", 2, ".", ","),
    currency!("USD", "United States Dollar", "Dollar", "Cent", "$", 2, ".", ","),
    currency!("ZAR", "South African Rand", "Rand", "Cent", "R", 2, ".", " "),
];

/// All descriptors keyed by uppercase code.
pub type Registry = BTreeMap<&'static str, CurrencyDescriptor>;

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    CURRENCIES
        .iter()
        .map(|descriptor| (descriptor.code, *descriptor))
        .collect()
});

/// Result of [`lookup_currency`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CurrencyLookup {
    /// The code matched one entry.
    Single(&'static CurrencyDescriptor),
    /// No code given, or the code is not in the table.
    All(&'static Registry),
}

impl CurrencyLookup {
    /// Returns the matched descriptor, if the lookup hit a single entry.
    #[must_use]
    pub const fn single(self) -> Option<&'static CurrencyDescriptor> {
        match self {
            Self::Single(descriptor) => Some(descriptor),
            Self::All(_) => None,
        }
    }
}

/// Looks up a currency by code, case-insensitively.
///
/// A missing, empty, or unknown code returns the whole registry instead of an
/// error, so callers can enumerate the supported currencies. Callers that need
/// a hard miss should use [`find_currency`].
#[must_use]
pub fn lookup_currency(code: Option<&str>) -> CurrencyLookup {
    match code.filter(|c| !c.is_empty()) {
        Some(code) => match find_currency(code) {
            Some(descriptor) => CurrencyLookup::Single(descriptor),
            None => {
                debug!(code, "Unknown currency code, returning full registry");
                CurrencyLookup::All(&REGISTRY)
            }
        },
        None => CurrencyLookup::All(&REGISTRY),
    }
}

/// Finds a single descriptor by code, case-insensitively.
#[must_use]
pub fn find_currency(code: &str) -> Option<&'static CurrencyDescriptor> {
    REGISTRY.get(code.to_ascii_uppercase().as_str())
}

/// Iterates over every descriptor in code order.
pub fn all_currencies() -> impl Iterator<Item = &'static CurrencyDescriptor> {
    REGISTRY.values()
}
