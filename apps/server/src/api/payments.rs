use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, post},
    Json, Router,
};

use pawhaven_core::constants::DEFAULT_CURRENCY;
use pawhaven_core::ledger::{DonationHistoryEntry, Reversal};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::{MessageResponse, PaymentIntentRequest, PaymentIntentResponse};

/// Reverses a payment: the campaign total is decremented and the record
/// removed as one unit. Safe to retry; a repeat is a no-op.
async fn reverse_payment(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let message = match state.ledger_service.reverse(&id, &user.identity()).await? {
        Reversal::Reversed => "Payment reversed.",
        Reversal::AlreadyReversed => "Payment already reversed.",
    };
    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}

async fn donation_history(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<DonationHistoryEntry>>> {
    let history = state
        .ledger_service
        .history_for_donator(&user.identity(), &email)?;
    Ok(Json(history))
}

/// Delegates to the external payment gateway. Amount validation happens
/// before anything leaves the process.
async fn create_payment_intent(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Json(payload): Json<PaymentIntentRequest>,
) -> ApiResult<Json<PaymentIntentResponse>> {
    let intent = state
        .payment_gateway
        .create_payment_intent(payload.amount, DEFAULT_CURRENCY)
        .await?;
    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/payments/{id}", delete(reverse_payment).get(donation_history))
        .route("/create-payment-intent", post(create_payment_intent))
}
