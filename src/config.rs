use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// SpaceX launches query endpoint used for first-run seeding
    #[serde(default = "default_spacex_url")]
    pub spacex_url: String,

    /// Kepler exoplanet CSV used to populate the planet store
    #[serde(default = "default_planets_csv")]
    pub planets_csv: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_spacex_url() -> String {
    "https://api.spacexdata.com/v4/launches/query".to_string()
}

fn default_planets_csv() -> String {
    "data/kepler_data.csv".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            spacex_url: default_spacex_url(),
            planets_csv: default_planets_csv(),
        }
    }
}

impl BackendConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BackendConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
