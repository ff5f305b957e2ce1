use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Json, Router,
};

use pawhaven_core::campaigns::{Campaign, CampaignUpdate, NewCampaign};
use pawhaven_core::ledger::PaymentRecord;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use crate::models::{DonateRequest, PauseRequest};

async fn create_campaign(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<NewCampaign>,
) -> ApiResult<Json<Campaign>> {
    let campaign = state
        .campaign_service
        .create(&user.identity(), payload)
        .await?;
    Ok(Json(campaign))
}

/// Public read; campaign pages link to it without a session.
async fn get_campaign(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Campaign>> {
    let campaign = state.campaign_service.get(&id)?;
    Ok(Json(campaign))
}

async fn list_own_campaigns(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<Campaign>>> {
    let campaigns = state
        .campaign_service
        .list_by_owner(&user.identity(), &email)?;
    Ok(Json(campaigns))
}

/// Records a donation against the campaign through the ledger engine.
async fn donate(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<DonateRequest>,
) -> ApiResult<Json<PaymentRecord>> {
    let record = state
        .ledger_service
        .donate(
            &id,
            payload.donation_amount,
            &user.identity(),
            &payload.donator_name,
        )
        .await?;
    Ok(Json(record))
}

async fn list_donators(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<PaymentRecord>>> {
    let records = state.ledger_service.list_by_campaign(&id)?;
    Ok(Json(records))
}

async fn set_paused(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<PauseRequest>,
) -> ApiResult<Json<Campaign>> {
    let campaign = state
        .campaign_service
        .set_paused(&user.identity(), &id, payload.is_paused)
        .await?;
    Ok(Json(campaign))
}

async fn edit_campaign(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> ApiResult<Json<Campaign>> {
    // Parsed by hand so a disallowed field (the derived donated total, the
    // pause flag, the owner) is a 400 with a message, not a bare 422.
    let update: CampaignUpdate = serde_json::from_value(payload)
        .map_err(|e| ApiError::BadRequest(format!("Invalid campaign update: {e}")))?;
    let campaign = state
        .campaign_service
        .edit(&user.identity(), &id, update)
        .await?;
    Ok(Json(campaign))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/donations", post(create_campaign))
        .route("/donations/{id}", get(get_campaign).patch(donate))
        .route("/donations/user/{email}", get(list_own_campaigns))
        .route("/donations/donators/{id}", get(list_donators))
        .route("/donations/pause/{id}", patch(set_paused))
        .route("/donations-edit/{id}", patch(edit_campaign))
}
