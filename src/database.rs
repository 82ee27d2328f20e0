use std::sync::{Arc, Mutex};

use crate::campaign::db::CampaignStore;
use crate::campaign::Campaign;

/// Handle to every store the service uses.
pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;
}

/// Campaigns held in process memory, in the order they were inserted.
#[derive(Debug, Default)]
pub struct MemoryCampaignStore {
    pub(crate) campaigns: Mutex<Vec<Campaign>>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    campaigns: Arc<MemoryCampaignStore>,
}

impl MemoryDatabase {
    pub fn new() -> MemoryDatabase {
        MemoryDatabase::default()
    }
}

impl Database for MemoryDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &*self.campaigns
    }
}
