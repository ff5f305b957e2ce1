//! Database models for adoption requests.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawhaven_core::adoptions::{AdoptionRequest, AdoptionStatus};

/// Database model for adoption requests. The status is stored as text;
/// rows with an unrecognized status are treated as rejected rather than
/// resurrected as pending.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::adoption_requests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AdoptionRequestDB {
    pub id: String,
    pub pet_id: String,
    pub pet_name: String,
    pub requester_email: String,
    pub requester_name: String,
    pub requester_phone: Option<String>,
    pub requester_address: Option<String>,
    pub pet_owner_email: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<AdoptionRequestDB> for AdoptionRequest {
    fn from(db: AdoptionRequestDB) -> Self {
        let status =
            AdoptionStatus::parse(&db.status).unwrap_or(AdoptionStatus::Rejected);
        Self {
            id: db.id,
            pet_id: db.pet_id,
            pet_name: db.pet_name,
            requester_email: db.requester_email,
            requester_name: db.requester_name,
            requester_phone: db.requester_phone,
            requester_address: db.requester_address,
            pet_owner_email: db.pet_owner_email,
            status,
            created_at: db.created_at,
        }
    }
}
