//! Currency domain types, rate resolution, and conversion.
//!
//! CRITICAL: All rate and amount arithmetic is decimal fixed-point:
//! - Derived rates and converted amounts round to [`RATE_SCALE`] places
//! - Banker's rounding (round half to even) throughout
//! - Stored direct rates are returned without re-rounding

use rust_decimal::{Decimal, RoundingStrategy};

pub mod conversion;
pub mod error;
pub mod resolver;
pub mod store;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;

pub use conversion::{ConversionEngine, convert_amount};
pub use error::ExchangeError;
pub use resolver::{PIVOT_CODE, RateResolver};
pub use store::{CurrencyDirectory, RateStore};
pub use types::{Conversion, Currency, ExchangeRate, RateOrigin, ResolvedRate};

/// Decimal scale for derived rates and converted amounts.
pub const RATE_SCALE: u32 = 4;

/// Rounds a value to [`RATE_SCALE`] places with banker's rounding.
///
/// Round half to even avoids the systematic bias of half-up when rates are
/// repeatedly inverted or cross-multiplied.
#[must_use]
pub fn round_half_even(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_even_midpoints() {
        // Exactly-halfway values round to the even last digit
        assert_eq!(round_half_even(dec!(2.00005)), dec!(2.0000));
        assert_eq!(round_half_even(dec!(2.00015)), dec!(2.0002));
        assert_eq!(round_half_even(dec!(2.00025)), dec!(2.0002));
    }

    #[test]
    fn test_round_half_even_non_midpoints() {
        assert_eq!(round_half_even(dec!(1.23456)), dec!(1.2346));
        assert_eq!(round_half_even(dec!(1.23454)), dec!(1.2345));
        assert_eq!(round_half_even(dec!(150.0000)), dec!(150.0000));
    }
}
