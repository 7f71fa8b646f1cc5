use launch_backend::config::BackendConfig;
use launch_backend::logging;
use launch_backend::module::launch::{LaunchService, LaunchStore, SpaceXClient};
use launch_backend::module::planet::PlanetStore;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

const CONFIG_FILE: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration, falling back to defaults when no file is present
    let config = if Path::new(CONFIG_FILE).exists() {
        BackendConfig::from_file(CONFIG_FILE)?
    } else {
        BackendConfig::default()
    };

    // Initialize logging
    let _logging_guard = logging::init_logging("logs", "launch-backend", &config.log_level);

    tracing::info!("Launch backend starting...");

    // Open the stores
    let launches = Arc::new(LaunchStore::open(&config.data_dir).await?);

    let planets = if Path::new(&config.planets_csv).exists() {
        Arc::new(PlanetStore::load_from_csv(&config.planets_csv).await?)
    } else {
        tracing::warn!(
            "Planet CSV not found at {}, planet store will be empty",
            config.planets_csv
        );
        Arc::new(PlanetStore::new())
    };

    // Seed launch history on first run; a failed download aborts startup
    let api_client = SpaceXClient::new(config.spacex_url.clone())?;
    let service = LaunchService::new(launches.clone(), planets.clone(), api_client);
    service.load_launch_data().await?;

    tracing::info!(
        "Ready: {} launches, {} planets",
        launches.count().await,
        planets.count()
    );

    Ok(())
}
