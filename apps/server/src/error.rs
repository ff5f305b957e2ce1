use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use pawhaven_core::adoptions::AdoptionError;
use pawhaven_core::errors::{DatabaseError, Error as CoreError};
use pawhaven_core::gateway::GatewayError;
use pawhaven_core::ledger::LedgerError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

const INTERNAL_MESSAGE: &str = "Internal server error";

fn map_core(err: &CoreError) -> (StatusCode, String) {
    match err {
        CoreError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
        CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
        CoreError::Ledger(e) => match e {
            LedgerError::CampaignNotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
            // The donation surface reports a paused campaign as forbidden.
            LedgerError::CampaignPaused => (StatusCode::FORBIDDEN, e.to_string()),
            LedgerError::InvalidAmount => (StatusCode::BAD_REQUEST, e.to_string()),
            LedgerError::ReconciliationRequired { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
            }
        },
        CoreError::Adoption(e) => match e {
            AdoptionError::DuplicateRequest | AdoptionError::InvalidStatus(_) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AdoptionError::PetNotFound(_) | AdoptionError::RequestNotFound(_) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            AdoptionError::PetAlreadyAdopted | AdoptionError::AlreadyResolved(_) => {
                (StatusCode::CONFLICT, e.to_string())
            }
        },
        CoreError::Gateway(e) => match e {
            GatewayError::AmountTooSmall | GatewayError::InvalidAmount => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            GatewayError::RequestFailed(_) | GatewayError::Rejected(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
            }
        },
        CoreError::Database(DatabaseError::NotFound(msg)) => {
            (StatusCode::NOT_FOUND, msg.clone())
        }
        CoreError::Database(_) | CoreError::Unexpected(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Core(e) => map_core(e),
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Unauthorized(reason) => (StatusCode::UNAUTHORIZED, reason.clone()),
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Full detail stays in the logs; the body stays generic.
            tracing::error!("internal error: {self}");
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
