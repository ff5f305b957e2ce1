use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};

use pawhaven_core::pets::{NewPet, Pet, PetUpdate};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;
use crate::models::AdoptedFlagRequest;

async fn add_pet(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<NewPet>,
) -> ApiResult<Json<Pet>> {
    let pet = state.pet_service.add_pet(&user.identity(), payload).await?;
    Ok(Json(pet))
}

/// Public read; listings link to it without a session.
async fn get_pet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Pet>> {
    let pet = state.pet_service.get_pet(&id)?;
    Ok(Json(pet))
}

async fn list_own_pets(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<Pet>>> {
    let pets = state.pet_service.list_by_owner(&user.identity(), &email)?;
    Ok(Json(pets))
}

async fn update_pet(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<PetUpdate>,
) -> ApiResult<Json<Pet>> {
    let pet = state
        .pet_service
        .update_pet(&user.identity(), &id, payload)
        .await?;
    Ok(Json(pet))
}

async fn set_adopted(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<AdoptedFlagRequest>,
) -> ApiResult<Json<Pet>> {
    let pet = state
        .pet_service
        .set_adopted(&user.identity(), &id, payload.adopted)
        .await?;
    Ok(Json(pet))
}

async fn delete_pet(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.pet_service.delete_pet(&user.identity(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pets", post(add_pet))
        .route(
            "/pets/{id}",
            get(get_pet).patch(update_pet).delete(delete_pet),
        )
        .route("/pets/user/{email}", get(list_own_pets))
        .route("/pets/adopt/{id}", patch(set_adopted))
}
