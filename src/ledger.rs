//! Presentation-only figures derived from a campaign.
//!
//! Nothing here touches the registry. The ledger reference is a display
//! string and carries no integrity guarantee: it is not a hash, is not
//! written anywhere, and cannot be verified against any chain.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::campaign::{Campaign, CampaignId};
use crate::error::Error;

const LEDGER_REFERENCE_PREFIX: &str = "0x";
const LEDGER_REFERENCE_SUFFIX: &str = "abc123def456";

/// Raised over target. Over-funded campaigns report a ratio above one.
pub fn funding_progress(campaign: &Campaign) -> Result<f64, Error> {
    if campaign.target_amount == 0 {
        return Err(Error::FundingTargetNotPositive {
            campaign_id: campaign.id,
        });
    }

    Ok(campaign.raised_amount as f64 / campaign.target_amount as f64)
}

/// [`funding_progress`] clamped to `[0, 1]` for progress bars.
pub fn display_progress(campaign: &Campaign) -> Result<f64, Error> {
    Ok(funding_progress(campaign)?.clamp(0.0, 1.0))
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LedgerReference(String);

impl LedgerReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LedgerReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stand-in for a transaction id. Distinct ids give distinct references
/// because the rendered id is embedded whole.
pub fn ledger_reference(campaign_id: CampaignId) -> LedgerReference {
    LedgerReference(format!(
        "{}{}{}",
        LEDGER_REFERENCE_PREFIX,
        campaign_id.to_string().to_lowercase(),
        LEDGER_REFERENCE_SUFFIX
    ))
}
