use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::authz::{self, Identity};
use crate::campaigns::CampaignRepositoryTrait;
use crate::errors::Result;
use crate::money;
use crate::users::UserServiceTrait;

use super::ledger_errors::LedgerError;
use super::ledger_model::{DonationHistoryEntry, NewPayment, PaymentRecord, Reversal};
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};

/// The donation ledger engine.
///
/// Coordinates payment-record creation and reversal with the campaign
/// total so that, at any point observable by other tasks, the total equals
/// the sum of live payment records. The increment and the record append
/// are two store writes; a failed append is compensated with a decrement,
/// and reversal runs as a single atomic storage job.
pub struct LedgerService {
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
    campaign_repository: Arc<dyn CampaignRepositoryTrait>,
    users: Arc<dyn UserServiceTrait>,
}

impl LedgerService {
    pub fn new(
        ledger_repository: Arc<dyn LedgerRepositoryTrait>,
        campaign_repository: Arc<dyn CampaignRepositoryTrait>,
        users: Arc<dyn UserServiceTrait>,
    ) -> Self {
        Self {
            ledger_repository,
            campaign_repository,
            users,
        }
    }
}

#[async_trait]
impl LedgerServiceTrait for LedgerService {
    async fn donate(
        &self,
        campaign_id: &str,
        amount: Decimal,
        identity: &Identity,
        donator_name: &str,
    ) -> Result<PaymentRecord> {
        match money::to_minor_units(amount) {
            Some(minor) if minor > 0 => {}
            _ => return Err(LedgerError::InvalidAmount.into()),
        }

        // Pre-check for a precise error before any mutation.
        let campaign = self
            .campaign_repository
            .find_by_id(campaign_id)?
            .ok_or_else(|| LedgerError::CampaignNotFound(campaign_id.to_string()))?;
        if campaign.is_paused {
            return Err(LedgerError::CampaignPaused.into());
        }

        // The increment re-asserts the pause flag in the store, so a
        // campaign paused between the check and this write stays closed.
        let updated = self
            .ledger_repository
            .increment_donated(campaign_id, amount)
            .await?;
        if !updated {
            return Err(match self.campaign_repository.find_by_id(campaign_id)? {
                Some(_) => LedgerError::CampaignPaused.into(),
                None => LedgerError::CampaignNotFound(campaign_id.to_string()).into(),
            });
        }

        let new_payment = NewPayment {
            id: Uuid::new_v4().to_string(),
            campaign_id: campaign_id.to_string(),
            donator_email: identity.email.clone(),
            donator_name: donator_name.to_string(),
            amount,
        };
        let payment_id = new_payment.id.clone();

        match self.ledger_repository.insert_payment(new_payment).await {
            Ok(record) => Ok(record),
            Err(insert_err) => {
                error!(
                    "payment {payment_id} append failed on campaign {campaign_id}, \
                     compensating {amount}: {insert_err}"
                );
                if let Err(comp_err) = self
                    .ledger_repository
                    .decrement_donated(campaign_id, amount)
                    .await
                {
                    error!(
                        "compensation failed: campaign {campaign_id} overstates its total \
                         by {amount} (payment {payment_id}): {comp_err}"
                    );
                    return Err(LedgerError::ReconciliationRequired {
                        campaign_id: campaign_id.to_string(),
                        reason: format!(
                            "uncompensated increment of {amount} after failed append of \
                             payment {payment_id}"
                        ),
                    }
                    .into());
                }
                Err(insert_err)
            }
        }
    }

    async fn reverse(&self, payment_id: &str, identity: &Identity) -> Result<Reversal> {
        let Some(payment) = self.ledger_repository.find_payment(payment_id)? else {
            debug!("payment {payment_id} already reversed or unknown; nothing to do");
            return Ok(Reversal::AlreadyReversed);
        };

        let role = self.users.get_role(&identity.email)?;
        authz::ensure_owner_or_admin(identity, &payment.donator_email, role)?;

        // The repository deletes and decrements in one atomic unit, and
        // skips the decrement when a concurrent reversal got there first,
        // so at-least-once retries cannot double-apply.
        let reversed = self.ledger_repository.reverse_payment(payment_id).await?;
        Ok(if reversed {
            Reversal::Reversed
        } else {
            Reversal::AlreadyReversed
        })
    }

    fn list_by_campaign(&self, campaign_id: &str) -> Result<Vec<PaymentRecord>> {
        self.campaign_repository
            .find_by_id(campaign_id)?
            .ok_or_else(|| LedgerError::CampaignNotFound(campaign_id.to_string()))?;
        self.ledger_repository.list_by_campaign(campaign_id)
    }

    fn history_for_donator(
        &self,
        identity: &Identity,
        email: &str,
    ) -> Result<Vec<DonationHistoryEntry>> {
        authz::ensure_self(identity, email)?;
        self.ledger_repository.history_for_donator(email)
    }
}
