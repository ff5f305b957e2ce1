use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use pawhaven_core::users::{NewUser, RegisterOutcome, User, UserProfileUpdate};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::AdminCheckResponse;

/// Public registration; idempotent on the email address.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewUser>,
) -> ApiResult<Json<RegisterOutcome>> {
    let outcome = state.user_service.register(payload).await?;
    Ok(Json(outcome))
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<User>> {
    let profile = state.user_service.get_by_email(&user.identity(), &email)?;
    Ok(Json(profile))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(email): Path<String>,
    Json(payload): Json<UserProfileUpdate>,
) -> ApiResult<Json<User>> {
    let profile = state
        .user_service
        .update_profile(&user.identity(), &email, payload)
        .await?;
    Ok(Json(profile))
}

// The admin check addresses the user by email, the grant by id; the two
// share one route with a generic parameter name.
async fn check_admin(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<AdminCheckResponse>> {
    let admin = state.user_service.is_admin(&user.identity(), &email)?;
    Ok(Json(AdminCheckResponse { admin }))
}

async fn grant_admin(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let updated = state.user_service.grant_admin(&user.identity(), &id).await?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(register))
        .route("/user/{email}", get(get_profile).patch(update_profile))
        .route("/users/admin/{id}", get(check_admin).patch(grant_admin))
}
