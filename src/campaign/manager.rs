use chrono::Utc;
use tracing::{info, warn};

use crate::database::Database;
use crate::error::Error;

use super::{Campaign, CampaignId, CampaignStatus, NewCampaign};

#[tracing::instrument(skip(db))]
pub async fn submit_campaign(db: &dyn Database, new: NewCampaign) -> Result<Campaign, Error> {
    let now = Utc::now();
    let campaign = Campaign {
        id: CampaignId::new(),
        title: new.title,
        description: new.description,
        category: new.category,
        location: new.location,
        phase: new.phase,
        urgency: new.urgency,
        target_amount: new.target_amount,
        raised_amount: 0,
        start_date: new.start_date,
        end_date: new.end_date,
        approved: false,
        status: CampaignStatus::Pending,
        created_at: now,
        modified_at: now,
    };

    campaign.validate()?;
    db.campaigns().insert_campaign(&campaign).await?;

    info!(campaign_id = %campaign.id, "campaign submitted for review");

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaigns(db: &dyn Database) -> Result<Vec<Campaign>, Error> {
    let campaigns = db.campaigns().fetch_campaigns().await?;

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn get_pending_campaigns(db: &dyn Database) -> Result<Vec<Campaign>, Error> {
    let campaigns = db
        .campaigns()
        .fetch_campaigns()
        .await?
        .into_iter()
        .filter(Campaign::is_pending)
        .collect();

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn get_active_campaigns(db: &dyn Database) -> Result<Vec<Campaign>, Error> {
    let campaigns = db
        .campaigns()
        .fetch_campaigns()
        .await?
        .into_iter()
        .filter(Campaign::is_active)
        .collect();

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaigns_by_status(
    db: &dyn Database,
    status: Option<CampaignStatus>,
) -> Result<Vec<Campaign>, Error> {
    match status {
        None => get_campaigns(db).await,
        Some(CampaignStatus::Pending) => get_pending_campaigns(db).await,
        Some(CampaignStatus::Active) => get_active_campaigns(db).await,
        Some(CampaignStatus::Closed) => {
            let campaigns = get_campaigns(db)
                .await?
                .into_iter()
                .filter(|c| c.approved && c.status == CampaignStatus::Closed)
                .collect();
            Ok(campaigns)
        }
    }
}

#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: &dyn Database,
    campaign_id: CampaignId,
) -> Result<Campaign, Error> {
    let campaign = db.campaigns().assert_campaign_exists(campaign_id).await?;

    Ok(campaign)
}

/// Moves a pending campaign to active. Only pending campaigns qualify;
/// approval happens at most once.
#[tracing::instrument(skip(db))]
pub async fn approve_campaign(
    db: &dyn Database,
    campaign_id: CampaignId,
) -> Result<Campaign, Error> {
    let campaign = db.campaigns().assert_campaign_exists(campaign_id).await?;

    if !campaign.is_pending() {
        warn!(%campaign_id, status = ?campaign.status, "refusing to approve campaign twice");
        return Err(Error::CampaignNotPending {
            campaign_id,
            status: campaign.status,
        });
    }

    let campaign = db
        .campaigns()
        .update_campaign_status(campaign, true, CampaignStatus::Active)
        .await?;

    info!(%campaign_id, "campaign approved");

    Ok(campaign)
}

/// Permanently removes a campaign, whatever state it is in.
#[tracing::instrument(skip(db))]
pub async fn reject_campaign(
    db: &dyn Database,
    campaign_id: CampaignId,
) -> Result<Campaign, Error> {
    let campaign = db.campaigns().delete_campaign(campaign_id).await?;

    info!(%campaign_id, was_approved = campaign.approved, "campaign rejected");

    Ok(campaign)
}
