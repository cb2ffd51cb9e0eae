//! Property-based tests for currency lookup and money formatting.

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use webfuncs_shared::Position;

use super::format::{format_money, format_number};
use super::registry::{CurrencyDescriptor, all_currencies, lookup_currency};

/// Strategy to pick any registered currency.
fn any_currency() -> impl Strategy<Value = &'static CurrencyDescriptor> {
    let all: Vec<_> = all_currencies().collect();
    prop::sample::select(all)
}

/// Strategy to generate amounts from -10,000,000.000 to 10,000,000.000.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|milli| Decimal::new(milli, 3))
}

/// Strategy to generate any position.
fn any_position() -> impl Strategy<Value = Position> {
    prop_oneof![
        Just(Position::Left),
        Just(Position::LeftSpace),
        Just(Position::Right),
        Just(Position::RightSpace),
    ]
}

/// Undoes grouping so the rendered number can be parsed back.
fn strip_formatting(text: &str, descriptor: &CurrencyDescriptor) -> String {
    let ungrouped = text.replace(descriptor.thousand_separator, "");
    if descriptor.decimal_separator.is_empty() {
        ungrouped
    } else {
        ungrouped.replace(descriptor.decimal_separator, ".")
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Lookup ignores the case of the code.
    #[test]
    fn prop_lookup_case_insensitive(descriptor in any_currency()) {
        let lower = descriptor.code.to_ascii_lowercase();
        prop_assert_eq!(
            lookup_currency(Some(descriptor.code)),
            lookup_currency(Some(lower.as_str()))
        );
    }

    /// The rendered number reads back as the amount rounded to the
    /// currency's decimals.
    #[test]
    fn prop_number_reads_back_as_rounded_amount(
        descriptor in any_currency(),
        amount in any_amount(),
    ) {
        let text = format_number(amount, descriptor);
        let parsed: Decimal = strip_formatting(&text, descriptor).parse().unwrap();
        let expected = amount.round_dp_with_strategy(
            descriptor.decimals,
            RoundingStrategy::MidpointAwayFromZero,
        );
        prop_assert_eq!(parsed, expected);
    }

    /// The fractional part always has exactly `decimals` digits.
    #[test]
    fn prop_fraction_width_matches_decimals(
        descriptor in any_currency(),
        amount in any_amount(),
    ) {
        let text = format_number(amount, descriptor);
        if descriptor.decimals == 0 {
            prop_assert!(text.chars().all(|c| c == '-' || c.is_ascii_digit()
                || descriptor.thousand_separator.contains(c)));
        } else {
            let (_, fraction) = text.rsplit_once(descriptor.decimal_separator).unwrap();
            prop_assert_eq!(fraction.len(), descriptor.decimals as usize);
        }
    }

    /// Every position contains the same label and number.
    #[test]
    fn prop_position_only_moves_the_label(
        descriptor in any_currency(),
        amount in any_amount(),
        position in any_position(),
        use_symbol in any::<bool>(),
    ) {
        let text = format_money(amount, descriptor.code, use_symbol, position).unwrap();
        let label = if use_symbol { descriptor.symbol } else { descriptor.code };
        let number = format_number(amount, descriptor);
        let stripped = text.replacen(label, "", 1);
        prop_assert_eq!(stripped.trim(), number.as_str());
    }
}
