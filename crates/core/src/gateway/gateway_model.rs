use serde::{Deserialize, Serialize};

/// A created payment intent. The client secret is handed to the frontend
/// to confirm the charge; the backend stores nothing about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount_minor: i64,
    pub currency: String,
}
