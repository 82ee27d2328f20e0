use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::campaign::{Amount, Campaign, CampaignId, CampaignStatus, Phase, Urgency};
use crate::database::Database;
use crate::error::Error;

const FLOOD_SHELTER_ID: CampaignId =
    CampaignId::from_uuid(Uuid::from_u128(0x16e7_7539_8873_4c8a_bca3_2036_0104_74ad));
const CYCLONE_SIRENS_ID: CampaignId =
    CampaignId::from_uuid(Uuid::from_u128(0x5ea8_1d0a_9788_4b8a_82d9_1a0d_636b_53ce));
const WATER_PURIFICATION_ID: CampaignId =
    CampaignId::from_uuid(Uuid::from_u128(0x5c90_3e93_2524_4876_b4c8_816b_98d0_c77b));
const SCHOOL_REBUILD_ID: CampaignId =
    CampaignId::from_uuid(Uuid::from_u128(0x3395_7eb6_0ee7_487f_a087_e55c_335b_d63c));

struct SeedCampaign {
    id: CampaignId,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    location: &'static str,
    phase: Phase,
    urgency: Urgency,
    target_amount: Amount,
    raised_amount: Amount,
    start: (i32, u32, u32),
    days: i64,
    approved: bool,
}

const CAMPAIGNS: &[SeedCampaign] = &[
    SeedCampaign {
        id: FLOOD_SHELTER_ID,
        title: "Emergency Flood Shelters",
        description: "Temporary shelters, tarps and bedding for displaced families",
        category: "Shelter",
        location: "Riverside District",
        phase: Phase::During,
        urgency: Urgency::Critical,
        target_amount: 50_000,
        raised_amount: 0,
        start: (2024, 9, 1),
        days: 45,
        approved: false,
    },
    SeedCampaign {
        id: CYCLONE_SIRENS_ID,
        title: "Cyclone Early Warning Sirens",
        description: "Solar powered sirens for coastal villages ahead of the season",
        category: "Preparedness",
        location: "Coastal Belt",
        phase: Phase::Before,
        urgency: Urgency::High,
        target_amount: 25_000,
        raised_amount: 0,
        start: (2024, 10, 1),
        days: 90,
        approved: false,
    },
    SeedCampaign {
        id: WATER_PURIFICATION_ID,
        title: "Clean Water Purification Units",
        description: "Portable purification units for relief camps",
        category: "Water & Sanitation",
        location: "Hill Region",
        phase: Phase::During,
        urgency: Urgency::Critical,
        target_amount: 30_000,
        raised_amount: 18_500,
        start: (2024, 8, 15),
        days: 60,
        approved: true,
    },
    SeedCampaign {
        id: SCHOOL_REBUILD_ID,
        title: "Rebuild Village Schools",
        description: "Reconstruction of classrooms damaged by the landslide",
        category: "Reconstruction",
        location: "Valley Township",
        phase: Phase::After,
        urgency: Urgency::Medium,
        target_amount: 120_000,
        raised_amount: 42_000,
        start: (2024, 7, 1),
        days: 180,
        approved: true,
    },
];

fn date((year, month, day): (i32, u32, u32)) -> Result<DateTime<Utc>, Error> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(|| {
            Error::ExistentialState(format!("invalid seed date {}-{}-{}", year, month, day))
        })
}

/// Loads the fixed campaign dataset into an empty registry.
pub async fn seed(db: &dyn Database) -> Result<(), Error> {
    let now = Utc::now();

    for entry in CAMPAIGNS {
        let start_date = date(entry.start)?;
        let status = if entry.approved {
            CampaignStatus::Active
        } else {
            CampaignStatus::Pending
        };

        let campaign = Campaign {
            id: entry.id,
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            category: entry.category.to_string(),
            location: entry.location.to_string(),
            phase: entry.phase,
            urgency: entry.urgency,
            target_amount: entry.target_amount,
            raised_amount: entry.raised_amount,
            start_date,
            end_date: start_date + Duration::days(entry.days),
            approved: entry.approved,
            status,
            created_at: now,
            modified_at: now,
        };

        db.campaigns().insert_campaign(&campaign).await?;
    }

    Ok(())
}
