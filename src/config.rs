use std::env;

use tracing::Level;

#[derive(Clone, Debug)]
pub struct Settings {
    pub bind_addr: String,
    pub log_level: Level,
    pub seed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            log_level: Level::DEBUG,
            seed: true,
        }
    }
}

/// Defaults overridden by `RELIEF_BIND_ADDR`, `RELIEF_LOG_LEVEL` and
/// `RELIEF_SEED`. Unparseable values keep the default.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(v) = env::var("RELIEF_BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Ok(v) = env::var("RELIEF_LOG_LEVEL") {
        if let Ok(level) = v.parse::<Level>() {
            settings.log_level = level;
        }
    }

    if let Ok(v) = env::var("RELIEF_SEED") {
        if let Some(seed) = parse_flag(&v) {
            settings.seed = seed;
        }
    }

    settings
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
