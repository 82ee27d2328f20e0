use actix_web::web::{Data, Json, Path, Query};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;
use crate::ledger;

use super::{manager, Amount, Campaign, CampaignId, CampaignStatus, NewCampaign, Phase, Urgency};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SubmitCampaignBody {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub phase: Phase,
    pub urgency: Urgency,
    pub target_amount: Amount,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<SubmitCampaignBody> for NewCampaign {
    fn from(body: SubmitCampaignBody) -> NewCampaign {
        NewCampaign {
            title: body.title,
            description: body.description,
            category: body.category,
            location: body.location,
            phase: body.phase,
            urgency: body.urgency,
            target_amount: body.target_amount,
            start_date: body.start_date,
            end_date: body.end_date,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CampaignQuery {
    pub status: Option<CampaignStatus>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CampaignBody {
    pub id: CampaignId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub phase: Phase,
    pub urgency: Urgency,
    pub target_amount: Amount,
    pub raised_amount: Amount,
    pub funding_progress: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub approved: bool,
    pub status: CampaignStatus,
    pub ledger_reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl CampaignBody {
    pub fn render(campaign: Campaign) -> Result<CampaignBody, Error> {
        let funding_progress = ledger::display_progress(&campaign)?;
        let ledger_reference = if campaign.approved {
            Some(ledger::ledger_reference(campaign.id).to_string())
        } else {
            None
        };

        Ok(CampaignBody {
            id: campaign.id,
            title: campaign.title,
            description: campaign.description,
            category: campaign.category,
            location: campaign.location,
            phase: campaign.phase,
            urgency: campaign.urgency,
            target_amount: campaign.target_amount,
            raised_amount: campaign.raised_amount,
            funding_progress,
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            approved: campaign.approved,
            status: campaign.status,
            ledger_reference,
            created_at: campaign.created_at,
            modified_at: campaign.modified_at,
        })
    }
}

#[post("/campaigns")]
#[tracing::instrument(skip(db))]
pub async fn submit_campaign(
    db: Data<Box<dyn Database>>,
    body: Json<SubmitCampaignBody>,
) -> Result<Json<CampaignBody>, Error> {
    let body = body.into_inner();

    let campaign = manager::submit_campaign(db.get_ref().as_ref(), body.into()).await?;

    Ok(Json(CampaignBody::render(campaign)?))
}

#[get("/campaigns")]
#[tracing::instrument(skip(db))]
pub async fn get_campaigns(
    db: Data<Box<dyn Database>>,
    query: Query<CampaignQuery>,
) -> Result<Json<Vec<CampaignBody>>, Error> {
    let query = query.into_inner();

    let campaigns =
        manager::get_campaigns_by_status(db.get_ref().as_ref(), query.status).await?;

    let body = campaigns
        .into_iter()
        .map(CampaignBody::render)
        .collect::<Result<_, _>>()?;

    Ok(Json(body))
}

#[get("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<CampaignBody>, Error> {
    let campaign_id = params.into_inner();

    let campaign = manager::get_campaign_by_id(db.get_ref().as_ref(), campaign_id).await?;

    Ok(Json(CampaignBody::render(campaign)?))
}

#[post("/campaigns/{campaign_id}/approve")]
#[tracing::instrument(skip(db))]
pub async fn approve_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<CampaignBody>, Error> {
    let campaign_id = params.into_inner();

    let campaign = manager::approve_campaign(db.get_ref().as_ref(), campaign_id).await?;

    Ok(Json(CampaignBody::render(campaign)?))
}

#[post("/campaigns/{campaign_id}/reject")]
#[tracing::instrument(skip(db))]
pub async fn reject_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<CampaignBody>, Error> {
    let campaign_id = params.into_inner();

    let campaign = manager::reject_campaign(db.get_ref().as_ref(), campaign_id).await?;

    Ok(Json(CampaignBody::render(campaign)?))
}
