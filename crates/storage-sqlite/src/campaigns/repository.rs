use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use pawhaven_core::campaigns::{
    Campaign, CampaignRepositoryTrait, CampaignUpdate, NewCampaign,
};
use pawhaven_core::{money, Result};

use super::model::{CampaignChangesetDB, CampaignDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::campaigns;

pub struct CampaignRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CampaignRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CampaignRepositoryTrait for CampaignRepository {
    fn find_by_id(&self, campaign_id: &str) -> Result<Option<Campaign>> {
        let mut conn = get_connection(&self.pool)?;
        campaigns::table
            .find(campaign_id)
            .first::<CampaignDB>(&mut conn)
            .optional()
            .into_core()
            .map(|campaign| campaign.map(Campaign::from))
    }

    fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Campaign>> {
        let mut conn = get_connection(&self.pool)?;
        campaigns::table
            .filter(campaigns::owner_email.eq(owner_email))
            .order(campaigns::created_at.desc())
            .load::<CampaignDB>(&mut conn)
            .into_core()
            .map(|campaigns| campaigns.into_iter().map(Campaign::from).collect())
    }

    async fn insert(&self, owner_email: &str, new_campaign: NewCampaign) -> Result<Campaign> {
        let target_amount_minor = money::to_minor_units(new_campaign.target_amount)
            .ok_or_else(|| {
                StorageError::InvalidValue("target amount is not cent-precise".to_string())
            })?;
        let campaign_db = CampaignDB {
            id: Uuid::new_v4().to_string(),
            owner_email: owner_email.to_string(),
            pet_name: new_campaign.pet_name,
            pet_image: new_campaign.pet_image,
            target_amount_minor,
            donated_amount_minor: 0,
            end_date: new_campaign.end_date,
            short_description: new_campaign.short_description,
            long_description: new_campaign.long_description,
            is_paused: false,
            created_at: Utc::now().naive_utc(),
        };
        self.writer
            .exec(move |conn| {
                diesel::insert_into(campaigns::table)
                    .values(&campaign_db)
                    .get_result::<CampaignDB>(conn)
                    .into_core()
                    .map(Campaign::from)
            })
            .await
    }

    async fn update(&self, campaign_id: &str, update: CampaignUpdate) -> Result<Campaign> {
        let campaign_id = campaign_id.to_string();
        let changeset = CampaignChangesetDB::from(update);
        self.writer
            .exec(move |conn| {
                if changeset.has_changes() {
                    diesel::update(campaigns::table.find(&campaign_id))
                        .set(&changeset)
                        .execute(conn)
                        .into_core()?;
                }
                campaigns::table
                    .find(&campaign_id)
                    .first::<CampaignDB>(conn)
                    .into_core()
                    .map(Campaign::from)
            })
            .await
    }

    async fn set_paused(&self, campaign_id: &str, paused: bool) -> Result<Campaign> {
        let campaign_id = campaign_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(campaigns::table.find(&campaign_id))
                    .set(campaigns::is_paused.eq(paused))
                    .execute(conn)
                    .into_core()?;
                campaigns::table
                    .find(&campaign_id)
                    .first::<CampaignDB>(conn)
                    .into_core()
                    .map(Campaign::from)
            })
            .await
    }
}
