use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::constants::MIN_PAYMENT_INTENT_MINOR;
use crate::errors::Result;
use crate::money;

use super::gateway_errors::GatewayError;
use super::gateway_model::PaymentIntent;
use super::gateway_traits::PaymentGatewayTrait;

const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Stripe-backed payment gateway client.
pub struct StripeGateway {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeGateway {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: secret_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Overrides the API base URL, for tests and sandboxes.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

#[derive(Deserialize)]
struct IntentResponse {
    id: String,
    client_secret: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

#[async_trait]
impl PaymentGatewayTrait for StripeGateway {
    async fn create_payment_intent(
        &self,
        amount: Decimal,
        currency: &str,
    ) -> Result<PaymentIntent> {
        let minor = match money::to_minor_units(amount) {
            Some(minor) if minor > 0 => minor,
            _ => return Err(GatewayError::InvalidAmount.into()),
        };
        if minor < MIN_PAYMENT_INTENT_MINOR {
            return Err(GatewayError::AmountTooSmall.into());
        }

        let params = [
            ("amount", minor.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];
        let response = self
            .http
            .post(format!("{}/v1/payment_intents", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(GatewayError::Rejected(message).into());
        }

        let intent: IntentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;
        debug!("created payment intent {} for {minor} {currency}", intent.id);

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
            amount_minor: minor,
            currency: currency.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rust_decimal_macros::dec;

    // Validation happens before any outbound request, so these run without
    // a network.
    #[tokio::test]
    async fn rejects_amounts_below_the_gateway_minimum() {
        let gateway = StripeGateway::new("sk_test_123");
        let err = gateway
            .create_payment_intent(dec!(0.30), "usd")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Gateway(GatewayError::AmountTooSmall)));
    }

    #[tokio::test]
    async fn rejects_non_positive_and_sub_cent_amounts() {
        let gateway = StripeGateway::new("sk_test_123");
        for bad in [dec!(0), dec!(-1), dec!(0.505)] {
            let err = gateway
                .create_payment_intent(bad, "usd")
                .await
                .unwrap_err();
            assert!(matches!(err, Error::Gateway(GatewayError::InvalidAmount)));
        }
    }

    #[tokio::test]
    async fn accepts_the_exact_minimum() {
        // $0.50 passes validation; the request itself fails fast against an
        // unroutable endpoint, which is the expected path in this test.
        let gateway =
            StripeGateway::new("sk_test_123").with_api_base("http://127.0.0.1:1");
        let err = gateway
            .create_payment_intent(dec!(0.50), "usd")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Gateway(GatewayError::RequestFailed(_))));
    }
}
