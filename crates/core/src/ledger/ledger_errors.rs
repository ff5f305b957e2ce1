use thiserror::Error;

/// Custom error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Campaign not found: {0}")]
    CampaignNotFound(String),

    #[error("This campaign is currently paused.")]
    CampaignPaused,

    #[error("Donation amount must be a positive amount with at most two decimal places")]
    InvalidAmount,

    /// Compensation for a half-applied donation failed; the campaign total
    /// overstates the payment log until reconciled by hand.
    #[error("Ledger out of sync for campaign {campaign_id}: {reason}")]
    ReconciliationRequired { campaign_id: String, reason: String },
}
