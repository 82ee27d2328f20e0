use actix_web::web::{self, Data, JsonConfig, PathConfig, QueryConfig, ServiceConfig};
use actix_web::{App, HttpServer, ResponseError};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod campaign;
pub mod config;
pub mod database;
pub mod error;
pub mod ledger;
pub mod seed;
pub mod typedid;

use config::Settings;
use database::{Database, MemoryDatabase};
use error::Error;

/// Registers extractor error formats and every route on `cfg`.
pub fn configure(cfg: &mut ServiceConfig) {
    cfg.app_data(JsonConfig::default().error_handler(|err, _req| {
        // format json errors with custom format
        Error::InvalidJson(err).into()
    }))
    .app_data(PathConfig::default().error_handler(|err, _req| {
        // format path errors with custom format
        Error::InvalidPath(err).into()
    }))
    .app_data(QueryConfig::default().error_handler(|err, _req| {
        // format query errors with custom format
        Error::InvalidQuery(err).into()
    }))
    .service(campaign::endpoints::submit_campaign)
    .service(campaign::endpoints::get_campaigns)
    .service(campaign::endpoints::get_campaign_by_id)
    .service(campaign::endpoints::approve_campaign)
    .service(campaign::endpoints::reject_campaign)
    .default_service(web::to(|| async { Error::PathNotFound.error_response() }));
}

pub async fn run(settings: Settings) -> Result<(), Error> {
    let db = MemoryDatabase::new();

    if settings.seed {
        info!("seeding campaign registry");
        seed::seed(&db).await?;
    }

    let db = Data::new(Box::new(db) as Box<dyn Database>);

    info!("listening on {}", settings.bind_addr);
    HttpServer::new(move || {
        App::new()
            .app_data(db.clone())
            .wrap(TracingLogger::default())
            .configure(configure)
    })
    .bind(&settings.bind_addr)?
    .run()
    .await?;

    Ok(())
}
