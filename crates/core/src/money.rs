//! Exact conversion between display amounts and integer minor units.
//!
//! Monetary values are `Decimal` in the domain and i64 cents in storage,
//! so a balance change is a single in-database expression rather than a
//! read-modify-write. Conversion is exact: amounts with sub-cent precision
//! are not representable and yield `None`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::constants::MINOR_UNITS_PER_UNIT;

/// Converts a display amount into minor units. Returns `None` when the
/// amount carries more precision than one cent or overflows i64.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    let scaled = amount * Decimal::from(MINOR_UNITS_PER_UNIT);
    if scaled != scaled.trunc() {
        return None;
    }
    scaled.to_i64()
}

/// Converts minor units back into a display amount with two decimals.
pub fn from_minor_units(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn converts_whole_and_cent_amounts() {
        assert_eq!(to_minor_units(dec!(50.00)), Some(5000));
        assert_eq!(to_minor_units(dec!(25.50)), Some(2550));
        assert_eq!(to_minor_units(dec!(0.01)), Some(1));
        assert_eq!(to_minor_units(dec!(10)), Some(1000));
    }

    #[test]
    fn rejects_sub_cent_precision() {
        assert_eq!(to_minor_units(dec!(0.005)), None);
        assert_eq!(to_minor_units(dec!(1.999)), None);
    }

    #[test]
    fn round_trips_minor_units() {
        assert_eq!(from_minor_units(2550), dec!(25.50));
        assert_eq!(from_minor_units(0), dec!(0.00));
        assert_eq!(to_minor_units(from_minor_units(123_456)), Some(123_456));
    }

    #[test]
    fn preserves_sign() {
        assert_eq!(to_minor_units(dec!(-3.25)), Some(-325));
        assert_eq!(from_minor_units(-325), dec!(-3.25));
    }
}
