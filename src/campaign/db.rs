use std::sync::MutexGuard;

use async_trait::async_trait;
use chrono::Utc;

use crate::database::MemoryCampaignStore;
use crate::error::Error;

use super::{Campaign, CampaignId, CampaignStatus};

#[async_trait]
pub trait CampaignStore: Send + Sync {
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error>;

    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error>;

    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error>;

    async fn assert_campaign_exists(&self, campaign_id: CampaignId) -> Result<Campaign, Error> {
        self.fetch_campaign_by_id(campaign_id)
            .await?
            .ok_or(Error::CampaignNotFound { campaign_id })
    }

    /// Writes the new approval state only if the stored record was not
    /// modified since `campaign` was read.
    async fn update_campaign_status(
        &self,
        campaign: Campaign,
        approved: bool,
        status: CampaignStatus,
    ) -> Result<Campaign, Error>;

    async fn delete_campaign(&self, campaign_id: CampaignId) -> Result<Campaign, Error>;
}

impl MemoryCampaignStore {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<Campaign>>, Error> {
        self.campaigns
            .lock()
            .map_err(|_| Error::ExistentialState("campaign registry lock was poisoned".into()))
    }
}

#[async_trait]
impl CampaignStore for MemoryCampaignStore {
    #[tracing::instrument(skip(self))]
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
        campaign.validate()?;

        let mut campaigns = self.lock()?;
        if campaigns.iter().any(|c| c.id == campaign.id) {
            return Err(Error::CampaignAlreadyExists {
                campaign_id: campaign.id,
            });
        }
        campaigns.push(campaign.clone());

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
        let campaigns = self.lock()?.clone();

        Ok(campaigns)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error> {
        let campaign = self
            .lock()?
            .iter()
            .find(|c| c.id == campaign_id)
            .cloned();

        Ok(campaign)
    }

    #[tracing::instrument(skip(self))]
    async fn update_campaign_status(
        &self,
        mut campaign: Campaign,
        approved: bool,
        status: CampaignStatus,
    ) -> Result<Campaign, Error> {
        let mut campaigns = self.lock()?;
        let stored = campaigns
            .iter_mut()
            .find(|c| c.id == campaign.id)
            .ok_or(Error::CampaignNotFound {
                campaign_id: campaign.id,
            })?;

        if stored.modified_at != campaign.modified_at
            || stored.approved != campaign.approved
            || stored.status != campaign.status
        {
            return Err(Error::ConcurrentModificationDetected);
        }

        campaign.approved = approved;
        campaign.status = status;
        campaign.modified_at = Utc::now();
        campaign.validate()?;

        stored.approved = campaign.approved;
        stored.status = campaign.status;
        stored.modified_at = campaign.modified_at;

        Ok(campaign)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_campaign(&self, campaign_id: CampaignId) -> Result<Campaign, Error> {
        let mut campaigns = self.lock()?;
        let index = campaigns
            .iter()
            .position(|c| c.id == campaign_id)
            .ok_or(Error::CampaignNotFound { campaign_id })?;

        Ok(campaigns.remove(index))
    }
}
