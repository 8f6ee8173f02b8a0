//! Black-market listing calculator.

use crate::input::{parse_f64, InputError};

/// Multiplier applied to the luna amount to obtain the listing price.
pub const LISTING_FEE_FACTOR: f64 = 1.35;

const RATE_SCALE: f64 = 1_000_000.0;

/// Derived listing figures for a rubles/luna pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketQuote {
    /// Luna amount with the listing fee applied, rounded up.
    pub listing_price: i64,
    /// Luna obtained per million rubles; zero when rubles is non-positive.
    pub exchange_rate: i64,
}

/// Compute the listing price and implied exchange rate.
///
/// Inputs are unbounded; negative values flow through the formulas
/// unguarded apart from the zero-rate rule.
pub fn quote(rubles: f64, luna: f64) -> MarketQuote {
    let listing_price = (luna * LISTING_FEE_FACTOR).ceil() as i64;
    let exchange_rate = if rubles > 0.0 {
        ((luna / rubles) * RATE_SCALE).floor() as i64
    } else {
        0
    };
    MarketQuote {
        listing_price,
        exchange_rate,
    }
}

/// Compute a quote from raw text-field contents.
pub fn quote_from_input(rubles: &str, luna: &str) -> Result<MarketQuote, InputError> {
    Ok(quote(parse_f64(rubles)?, parse_f64(luna)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_price_rounds_up() {
        let q = quote(1_000_000.0, 10.0);
        assert_eq!(q.listing_price, 14); // ceil(10 * 1.35)
        assert_eq!(q.exchange_rate, 10);
    }

    #[test]
    fn exact_listing_price_is_not_bumped() {
        let q = quote(1.0, 20.0);
        assert_eq!(q.listing_price, 27); // 20 * 1.35 is exactly 27
    }

    #[test]
    fn zero_rubles_pins_rate_to_zero() {
        assert_eq!(quote(0.0, 500.0).exchange_rate, 0);
        assert_eq!(quote(-100.0, 500.0).exchange_rate, 0);
    }

    #[test]
    fn rate_is_floored() {
        // 7 / 3_000_000 * 1_000_000 = 2.333...
        assert_eq!(quote(3_000_000.0, 7.0).exchange_rate, 2);
    }

    #[test]
    fn negative_luna_flows_through() {
        let q = quote(1_000_000.0, -10.0);
        assert_eq!(q.listing_price, -13); // ceil(-13.5)
        assert_eq!(q.exchange_rate, -10);
    }

    #[test]
    fn unparsable_input_is_a_generic_error() {
        assert_eq!(quote_from_input("abc", "10"), Err(InputError));
        assert_eq!(quote_from_input("10", ""), Err(InputError));
    }

    #[test]
    fn text_input_matches_numeric_path() {
        assert_eq!(
            quote_from_input(" 1000000 ", "10").unwrap(),
            quote(1_000_000.0, 10.0)
        );
    }
}
