use crate::app_config::AppConfig;
use tracing::{debug, info, warn};

mod app_config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration, {} route(s) in {}", config.routes().len(), config.unit());

    if config.routes().is_empty() {
        warn!("⚠️ No routes configured");
    }

    let unit = config.unit();
    for route in config.routes() {
        debug!("{}: {:?} -> {:?}", route.name(), route.from(), route.to());
        info!("📏 {}: {:.2} {}", route.name(), route.distance(unit), unit);
    }

    Ok(())
}
