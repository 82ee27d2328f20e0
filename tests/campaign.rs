use actix_web::http::StatusCode;
use actix_web::web::Data;
use actix_web::{test, App};
use chrono::{Duration, TimeZone, Utc};
use serde_json::Value;

use relief_server::campaign::{
    Campaign, CampaignBody, CampaignId, CampaignStatus, Phase, SubmitCampaignBody, Urgency,
};
use relief_server::database::{Database, MemoryDatabase};

fn data(db: &MemoryDatabase) -> Data<Box<dyn Database>> {
    Data::new(Box::new(db.clone()) as Box<dyn Database>)
}

fn submit_body(target_amount: u64) -> SubmitCampaignBody {
    let start_date = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
    SubmitCampaignBody {
        title: "Emergency Flood Shelters".into(),
        description: "Tarps and bedding for displaced families".into(),
        category: "Shelter".into(),
        location: "Riverside District".into(),
        phase: Phase::During,
        urgency: Urgency::Critical,
        target_amount,
        start_date,
        end_date: start_date + Duration::days(30),
    }
}

#[actix_web::test]
async fn approve_moves_campaign_to_active_listing() {
    let db = MemoryDatabase::new();
    let app = test::init_service(
        App::new()
            .app_data(data(&db))
            .configure(relief_server::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/campaigns")
        .set_json(&submit_body(1000))
        .to_request();
    let campaign: CampaignBody = test::call_and_read_body_json(&app, req).await;
    assert!(!campaign.approved);
    assert_eq!(campaign.status, CampaignStatus::Pending);
    assert_eq!(campaign.ledger_reference, None);

    let req = test::TestRequest::get()
        .uri("/campaigns?status=PENDING")
        .to_request();
    let pending: Vec<CampaignBody> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, campaign.id);

    let req = test::TestRequest::post()
        .uri(&format!("/campaigns/{}/approve", campaign.id))
        .to_request();
    let approved: CampaignBody = test::call_and_read_body_json(&app, req).await;
    assert!(approved.approved);
    assert_eq!(approved.status, CampaignStatus::Active);
    assert_eq!(
        approved.ledger_reference,
        Some(format!(
            "0x{}abc123def456",
            campaign.id.to_string().to_lowercase()
        ))
    );

    let req = test::TestRequest::get()
        .uri("/campaigns?status=PENDING")
        .to_request();
    let pending: Vec<CampaignBody> = test::call_and_read_body_json(&app, req).await;
    assert!(pending.is_empty());

    let req = test::TestRequest::get()
        .uri("/campaigns?status=ACTIVE")
        .to_request();
    let active: Vec<CampaignBody> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, campaign.id);
    assert_eq!(active[0].status, CampaignStatus::Active);
}

#[actix_web::test]
async fn approving_twice_is_a_conflict() {
    let db = MemoryDatabase::new();
    let app = test::init_service(
        App::new()
            .app_data(data(&db))
            .configure(relief_server::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/campaigns")
        .set_json(&submit_body(1000))
        .to_request();
    let campaign: CampaignBody = test::call_and_read_body_json(&app, req).await;

    let uri = format!("/campaigns/{}/approve", campaign.id);
    let resp = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, test::TestRequest::post().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], "E4091002");
    assert_eq!(body["error_meta"]["status"], "ACTIVE");
}

#[actix_web::test]
async fn rejected_campaign_is_gone() {
    let db = MemoryDatabase::new();
    let app = test::init_service(
        App::new()
            .app_data(data(&db))
            .configure(relief_server::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/campaigns")
        .set_json(&submit_body(1000))
        .to_request();
    let campaign: CampaignBody = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/campaigns/{}/reject", campaign.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/campaigns").to_request();
    let all: Vec<CampaignBody> = test::call_and_read_body_json(&app, req).await;
    assert!(all.is_empty());

    for req in vec![
        test::TestRequest::get().uri(&format!("/campaigns/{}", campaign.id)),
        test::TestRequest::post().uri(&format!("/campaigns/{}/approve", campaign.id)),
        test::TestRequest::post().uri(&format!("/campaigns/{}/reject", campaign.id)),
    ] {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error_code"], "E4041001");
        assert_eq!(body["error_meta"]["campaign_id"], campaign.id.to_string());
    }
}

#[actix_web::test]
async fn campaign_reports_funding_progress() {
    let db = MemoryDatabase::new();
    let start_date = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
    let campaign = Campaign {
        id: CampaignId::new(),
        title: "Clean Water Purification Units".into(),
        description: "Portable purification units for relief camps".into(),
        category: "Water & Sanitation".into(),
        location: "Hill Region".into(),
        phase: Phase::During,
        urgency: Urgency::High,
        target_amount: 1000,
        raised_amount: 250,
        start_date,
        end_date: start_date + Duration::days(60),
        approved: false,
        status: CampaignStatus::Pending,
        created_at: start_date,
        modified_at: start_date,
    };
    db.campaigns().insert_campaign(&campaign).await.unwrap();
    let app = test::init_service(
        App::new()
            .app_data(data(&db))
            .configure(relief_server::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/campaigns/{}", campaign.id))
        .to_request();
    let body: CampaignBody = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.funding_progress, 0.25);
    assert_eq!(body.raised_amount, 250);
    assert_eq!(body.target_amount, 1000);
}

#[actix_web::test]
async fn invalid_requests_use_error_format() {
    let db = MemoryDatabase::new();
    let app = test::init_service(
        App::new()
            .app_data(data(&db))
            .configure(relief_server::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/campaigns")
        .set_json(&submit_body(0))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], "E4001003");

    let req = test::TestRequest::get()
        .uri("/campaigns/not-a-campaign")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], "E4001001");

    let req = test::TestRequest::get().uri("/volunteers").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], "E4041000");

    assert!(db.campaigns().fetch_campaigns().await.unwrap().is_empty());
}
