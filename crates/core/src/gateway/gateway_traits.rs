use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;

use super::gateway_model::PaymentIntent;

/// Contract for the external payment gateway.
///
/// Amount validation (positivity, cent precision, gateway minimum) happens
/// before any outbound call, so a rejected amount never leaves the process.
#[async_trait]
pub trait PaymentGatewayTrait: Send + Sync {
    async fn create_payment_intent(&self, amount: Decimal, currency: &str)
        -> Result<PaymentIntent>;
}
