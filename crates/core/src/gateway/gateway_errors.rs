use thiserror::Error;

/// Custom error type for payment gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Amount must be at least $0.50")]
    AmountTooSmall,

    #[error("Amount must be a positive amount with at most two decimal places")]
    InvalidAmount,

    #[error("Payment gateway request failed: {0}")]
    RequestFailed(String),

    #[error("Payment gateway rejected the request: {0}")]
    Rejected(String),
}
