use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch, post},
    Json, Router,
};

use pawhaven_core::adoptions::{AdoptionRequest, AdoptionStatus, NewAdoptionRequest};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use crate::models::{HasRequestedQuery, HasRequestedResponse, SetStatusRequest};

async fn request_adoption(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<NewAdoptionRequest>,
) -> ApiResult<Json<AdoptionRequest>> {
    let request = state
        .adoption_service
        .request(&user.identity(), payload)
        .await?;
    Ok(Json(request))
}

async fn check_requested(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Query(query): Query<HasRequestedQuery>,
) -> ApiResult<Json<HasRequestedResponse>> {
    let has_requested = state
        .adoption_service
        .has_requested(&query.pet_id, &query.email)?;
    Ok(Json(HasRequestedResponse { has_requested }))
}

/// Requests targeting the caller's pets.
async fn list_for_owner(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<AdoptionRequest>>> {
    let requests = state
        .adoption_service
        .list_for_owner(&user.identity(), &email)?;
    Ok(Json(requests))
}

// Legacy clients post the pet id alongside an accept; the request row is
// authoritative, so the body is ignored entirely.
async fn accept_request(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<AdoptionRequest>> {
    let request = state
        .adoption_service
        .accept(&user.identity(), &id)
        .await?;
    Ok(Json(request))
}

async fn reject_request(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<AdoptionRequest>> {
    let request = state
        .adoption_service
        .reject(&user.identity(), &id)
        .await?;
    Ok(Json(request))
}

/// Administrative override for owner-or-admin.
async fn set_status(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<SetStatusRequest>,
) -> ApiResult<Json<AdoptionRequest>> {
    let status = AdoptionStatus::parse(&payload.status)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let request = state
        .adoption_service
        .set_status(&user.identity(), &id, status)
        .await?;
    Ok(Json(request))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/adoptions", post(request_adoption))
        .route("/adoptions/check", get(check_requested))
        .route("/adoptions/accept/{id}", patch(accept_request))
        .route("/adoptions/reject/{id}", patch(reject_request))
        .route("/adoptions/{id}", patch(set_status).get(list_for_owner))
}
