//! Database models for the payments log.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use pawhaven_core::ledger::PaymentRecord;
use pawhaven_core::money;

/// Database model for payment records. Rows are append-only; the only
/// delete path is reversal, which also compensates the campaign total.
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
#[diesel(table_name = crate::schema::payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaymentDB {
    pub id: String,
    pub campaign_id: String,
    pub donator_email: String,
    pub donator_name: String,
    pub amount_minor: i64,
    pub created_at: NaiveDateTime,
}

impl From<PaymentDB> for PaymentRecord {
    fn from(db: PaymentDB) -> Self {
        Self {
            id: db.id,
            campaign_id: db.campaign_id,
            donator_email: db.donator_email,
            donator_name: db.donator_name,
            amount: money::from_minor_units(db.amount_minor),
            created_at: db.created_at,
        }
    }
}
