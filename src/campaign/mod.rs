use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type CampaignId = TypedId<Campaign>;

/// Whole currency units.
pub type Amount = u64;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub phase: Phase,
    pub urgency: Urgency,
    pub target_amount: Amount,
    pub raised_amount: Amount,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub approved: bool,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl TypedIdMarker for Campaign {
    fn tag() -> &'static str {
        "CMP"
    }
}

impl Campaign {
    pub fn is_pending(&self) -> bool {
        !self.approved
    }

    pub fn is_active(&self) -> bool {
        self.approved && self.status == CampaignStatus::Active
    }

    /// Checks everything the registry guarantees about a stored campaign.
    pub fn validate(&self) -> Result<(), Error> {
        if self.target_amount == 0 {
            return Err(Error::InvalidFundingTarget {
                target_amount: self.target_amount,
            });
        }

        if self.end_date <= self.start_date {
            return Err(Error::InvalidCampaignWindow {
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }

        let consistent = match self.status {
            CampaignStatus::Pending => !self.approved,
            CampaignStatus::Active | CampaignStatus::Closed => self.approved,
        };
        if !consistent {
            return Err(Error::ExistentialState(format!(
                "campaign {} has approved={} but status {:?}",
                self.id, self.approved, self.status
            )));
        }

        Ok(())
    }
}

/// The fields a submitter provides; everything else is assigned on submission.
#[derive(Clone, Debug)]
pub struct NewCampaign {
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

/// Which part of the disaster response a campaign funds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Phase {
    Before,
    During,
    After,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum CampaignStatus {
    Pending,
    Active,
    Closed,
}
