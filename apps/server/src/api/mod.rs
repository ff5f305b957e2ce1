//! HTTP surface: one router per resource, assembled here.

mod adoptions;
mod campaigns;
mod payments;
mod pets;
mod users;

use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::auth::{self, AuthError};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;
use crate::models::{TokenRequest, TokenResponse};

async fn healthz() -> &'static str {
    "ok"
}

/// Mints a signed, time-bounded credential for the posted identity claims.
async fn mint_token(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(ApiError::BadRequest("A valid email is required".to_string()));
    }
    let token = state
        .auth
        .issue_token(&payload.email)
        .map_err(|err| match err {
            AuthError::Unauthorized => ApiError::Unauthorized("unauthorized access".to_string()),
            AuthError::Internal(msg) => {
                ApiError::Core(pawhaven_core::Error::Unexpected(msg))
            }
        })?;
    Ok(Json(TokenResponse {
        token,
        expires_in: state.auth.expires_in().as_secs(),
    }))
}

fn build_cors(allowed: &[String]) -> CorsLayer {
    if allowed.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/jwt", post(mint_token))
        .merge(users::router())
        .merge(pets::router())
        .merge(campaigns::router())
        .merge(payments::router())
        .merge(adoptions::router())
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            auth::inject_auth_user,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(build_cors(&config.cors_allow))
        .with_state(state)
}
