use tracing_subscriber::fmt::format::FmtSpan;

use relief_server::config::load_settings;
use relief_server::error::Error;

#[actix_web::main]
async fn main() -> Result<(), Error> {
    let settings = load_settings();

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    relief_server::run(settings).await
}
