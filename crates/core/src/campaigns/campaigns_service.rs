use std::sync::Arc;

use async_trait::async_trait;

use crate::authz::{self, Identity};
use crate::errors::{Error, Result};
use crate::users::UserServiceTrait;

use super::campaigns_model::{Campaign, CampaignUpdate, NewCampaign};
use super::campaigns_traits::{CampaignRepositoryTrait, CampaignServiceTrait};

/// Service for managing fundraising campaigns.
pub struct CampaignService {
    repository: Arc<dyn CampaignRepositoryTrait>,
    users: Arc<dyn UserServiceTrait>,
}

impl CampaignService {
    pub fn new(
        repository: Arc<dyn CampaignRepositoryTrait>,
        users: Arc<dyn UserServiceTrait>,
    ) -> Self {
        Self { repository, users }
    }

    fn get_owned(&self, identity: &Identity, campaign_id: &str) -> Result<Campaign> {
        let campaign = self
            .repository
            .find_by_id(campaign_id)?
            .ok_or_else(|| Error::NotFound(format!("Campaign {campaign_id} not found")))?;
        let role = self.users.get_role(&identity.email)?;
        authz::ensure_owner_or_admin(identity, &campaign.owner_email, role)?;
        Ok(campaign)
    }
}

#[async_trait]
impl CampaignServiceTrait for CampaignService {
    async fn create(&self, identity: &Identity, new_campaign: NewCampaign) -> Result<Campaign> {
        new_campaign.validate()?;
        self.repository.insert(&identity.email, new_campaign).await
    }

    fn get(&self, campaign_id: &str) -> Result<Campaign> {
        self.repository
            .find_by_id(campaign_id)?
            .ok_or_else(|| Error::NotFound(format!("Campaign {campaign_id} not found")))
    }

    fn list_by_owner(&self, identity: &Identity, email: &str) -> Result<Vec<Campaign>> {
        authz::ensure_self(identity, email)?;
        self.repository.list_by_owner(email)
    }

    async fn edit(
        &self,
        identity: &Identity,
        campaign_id: &str,
        update: CampaignUpdate,
    ) -> Result<Campaign> {
        update.validate()?;
        self.get_owned(identity, campaign_id)?;
        self.repository.update(campaign_id, update).await
    }

    async fn set_paused(
        &self,
        identity: &Identity,
        campaign_id: &str,
        paused: bool,
    ) -> Result<Campaign> {
        self.get_owned(identity, campaign_id)?;
        self.repository.set_paused(campaign_id, paused).await
    }
}
