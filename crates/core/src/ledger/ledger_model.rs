use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An immutable log entry of one donation against a campaign. Records are
/// never edited; the only mutation is reversal, which removes the record
/// and compensates the campaign total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub campaign_id: String,
    pub donator_email: String,
    pub donator_name: String,
    pub amount: Decimal,
    pub created_at: NaiveDateTime,
}

/// Input model for appending a payment record. The id is assigned by the
/// ledger engine before the write so partial failures can be traced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub id: String,
    pub campaign_id: String,
    pub donator_email: String,
    pub donator_name: String,
    pub amount: Decimal,
}

/// A payment record joined with campaign display fields, for a donator's
/// history view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationHistoryEntry {
    pub payment_id: String,
    pub campaign_id: String,
    pub pet_name: String,
    pub pet_image: Option<String>,
    pub amount: Decimal,
    pub created_at: NaiveDateTime,
}

/// Outcome of a reversal. Reversal is idempotent: reversing a record that
/// is already gone reports `AlreadyReversed` without touching any total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reversal {
    Reversed,
    AlreadyReversed,
}
