//! Shared constants.

/// Minor units (cents) per whole currency unit.
pub const MINOR_UNITS_PER_UNIT: i64 = 100;

/// Smallest amount the payment gateway accepts, in minor units ($0.50).
pub const MIN_PAYMENT_INTENT_MINOR: i64 = 50;

/// Currency used for campaigns and payment intents.
pub const DEFAULT_CURRENCY: &str = "usd";
