//! Database models for campaigns.
//!
//! Monetary columns hold integer minor units so the ledger can mutate the
//! donated total with a single in-database expression.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawhaven_core::campaigns::{Campaign, CampaignUpdate};
use pawhaven_core::money;

/// Database model for campaigns.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::campaigns)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CampaignDB {
    pub id: String,
    pub owner_email: String,
    pub pet_name: String,
    pub pet_image: Option<String>,
    pub target_amount_minor: i64,
    pub donated_amount_minor: i64,
    pub end_date: Option<NaiveDateTime>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub is_paused: bool,
    pub created_at: NaiveDateTime,
}

/// Changeset for campaign edits; `None` fields are left untouched. The
/// donated total and the pause flag are deliberately absent: the total
/// belongs to the ledger and the flag has its own operation.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::campaigns)]
pub struct CampaignChangesetDB {
    pub pet_name: Option<String>,
    pub pet_image: Option<String>,
    pub target_amount_minor: Option<i64>,
    pub end_date: Option<NaiveDateTime>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
}

impl CampaignChangesetDB {
    pub fn has_changes(&self) -> bool {
        self.pet_name.is_some()
            || self.pet_image.is_some()
            || self.target_amount_minor.is_some()
            || self.end_date.is_some()
            || self.short_description.is_some()
            || self.long_description.is_some()
    }
}

impl From<CampaignUpdate> for CampaignChangesetDB {
    fn from(update: CampaignUpdate) -> Self {
        Self {
            pet_name: update.pet_name,
            pet_image: update.pet_image,
            // The update was validated upstream; a target that survived
            // validation always converts exactly.
            target_amount_minor: update.target_amount.and_then(money::to_minor_units),
            end_date: update.end_date,
            short_description: update.short_description,
            long_description: update.long_description,
        }
    }
}

impl From<CampaignDB> for Campaign {
    fn from(db: CampaignDB) -> Self {
        Self {
            id: db.id,
            owner_email: db.owner_email,
            pet_name: db.pet_name,
            pet_image: db.pet_image,
            target_amount: money::from_minor_units(db.target_amount_minor),
            donated_amount: money::from_minor_units(db.donated_amount_minor),
            end_date: db.end_date,
            short_description: db.short_description,
            long_description: db.long_description,
            is_paused: db.is_paused,
            created_at: db.created_at,
        }
    }
}
