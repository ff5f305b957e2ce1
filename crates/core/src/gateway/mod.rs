//! Payment gateway module - outbound payment-intent creation.

mod gateway_errors;
mod gateway_model;
mod gateway_traits;
mod stripe;

pub use gateway_errors::GatewayError;
pub use gateway_model::PaymentIntent;
pub use gateway_traits::PaymentGatewayTrait;
pub use stripe::StripeGateway;
