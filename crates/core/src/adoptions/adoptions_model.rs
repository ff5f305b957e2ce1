use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::adoptions_errors::AdoptionError;

/// Lifecycle of an adoption request. `pending` is the only state that can
/// transition; `accepted` and `rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl AdoptionStatus {
    pub fn parse(value: &str) -> Result<Self, AdoptionError> {
        match value {
            "pending" => Ok(AdoptionStatus::Pending),
            "accepted" => Ok(AdoptionStatus::Accepted),
            "rejected" => Ok(AdoptionStatus::Rejected),
            other => Err(AdoptionError::InvalidStatus(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdoptionStatus::Pending => "pending",
            AdoptionStatus::Accepted => "accepted",
            AdoptionStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, AdoptionStatus::Pending)
    }
}

/// Domain model representing a pending claim by a user to adopt a pet.
/// The pet's owner is recorded at request time so resolution does not
/// depend on later ownership edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequest {
    pub id: String,
    pub pet_id: String,
    pub pet_name: String,
    pub requester_email: String,
    pub requester_name: String,
    pub requester_phone: Option<String>,
    pub requester_address: Option<String>,
    pub pet_owner_email: String,
    pub status: AdoptionStatus,
    pub created_at: NaiveDateTime,
}

/// Input model for filing an adoption request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdoptionRequest {
    pub pet_id: String,
    pub requester_name: String,
    pub requester_phone: Option<String>,
    pub requester_address: Option<String>,
}
