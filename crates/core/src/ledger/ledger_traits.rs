use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::authz::Identity;
use crate::errors::Result;

use super::ledger_model::{DonationHistoryEntry, NewPayment, PaymentRecord, Reversal};

/// Storage contract for the donation ledger.
///
/// Total arithmetic must happen inside the store as a single atomic
/// operation (an in-database expression), never as read-modify-write from
/// the application layer, or concurrent donations to the same campaign
/// lose updates.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    fn find_payment(&self, payment_id: &str) -> Result<Option<PaymentRecord>>;
    fn list_by_campaign(&self, campaign_id: &str) -> Result<Vec<PaymentRecord>>;
    fn history_for_donator(&self, donator_email: &str) -> Result<Vec<DonationHistoryEntry>>;

    /// Adds `amount` to the campaign total, guarded on the campaign
    /// existing and not being paused. Returns whether a row was updated.
    async fn increment_donated(&self, campaign_id: &str, amount: Decimal) -> Result<bool>;

    /// Subtracts `amount` from the campaign total. Used only to compensate
    /// a failed record append.
    async fn decrement_donated(&self, campaign_id: &str, amount: Decimal) -> Result<()>;

    async fn insert_payment(&self, new_payment: NewPayment) -> Result<PaymentRecord>;

    /// Deletes the record and decrements its campaign total as one atomic
    /// unit. Returns `false` when the record was already gone, in which
    /// case no total is touched.
    async fn reverse_payment(&self, payment_id: &str) -> Result<bool>;
}

/// Trait defining the contract for ledger service operations.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    /// Appends a donation. Not idempotent by design: every call creates a
    /// new record, so callers that retry must dedupe at a higher level.
    async fn donate(
        &self,
        campaign_id: &str,
        amount: Decimal,
        identity: &Identity,
        donator_name: &str,
    ) -> Result<PaymentRecord>;

    /// Reverses a payment. Idempotent; payer-or-admin only.
    async fn reverse(&self, payment_id: &str, identity: &Identity) -> Result<Reversal>;

    fn list_by_campaign(&self, campaign_id: &str) -> Result<Vec<PaymentRecord>>;
    fn history_for_donator(
        &self,
        identity: &Identity,
        email: &str,
    ) -> Result<Vec<DonationHistoryEntry>>;
}
