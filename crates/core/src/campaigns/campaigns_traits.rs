use async_trait::async_trait;

use crate::authz::Identity;
use crate::errors::Result;

use super::campaigns_model::{Campaign, CampaignUpdate, NewCampaign};

/// Trait defining the contract for campaign repository operations.
///
/// The donated total is not writable through this trait; it belongs to the
/// ledger repository, which mutates it with atomic in-store arithmetic.
#[async_trait]
pub trait CampaignRepositoryTrait: Send + Sync {
    fn find_by_id(&self, campaign_id: &str) -> Result<Option<Campaign>>;
    fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Campaign>>;
    async fn insert(&self, owner_email: &str, new_campaign: NewCampaign) -> Result<Campaign>;
    async fn update(&self, campaign_id: &str, update: CampaignUpdate) -> Result<Campaign>;
    async fn set_paused(&self, campaign_id: &str, paused: bool) -> Result<Campaign>;
}

/// Trait defining the contract for campaign service operations.
#[async_trait]
pub trait CampaignServiceTrait: Send + Sync {
    async fn create(&self, identity: &Identity, new_campaign: NewCampaign) -> Result<Campaign>;
    fn get(&self, campaign_id: &str) -> Result<Campaign>;
    fn list_by_owner(&self, identity: &Identity, email: &str) -> Result<Vec<Campaign>>;
    async fn edit(
        &self,
        identity: &Identity,
        campaign_id: &str,
        update: CampaignUpdate,
    ) -> Result<Campaign>;
    async fn set_paused(
        &self,
        identity: &Identity,
        campaign_id: &str,
        paused: bool,
    ) -> Result<Campaign>;
}
