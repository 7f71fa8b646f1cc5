///! Planet store - populated from a Kepler exoplanet archive CSV export
///!
///! The launch module only ever reads from this store; ingest happens once
///! on open and keeps confirmed, habitable rows.

use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;

use super::types::{KeplerCsvRow, Planet};

/// Read-only collection of planets keyed by kepler name
pub struct PlanetStore {
    planets: HashMap<String, Planet>,
}

impl PlanetStore {
    /// Create an empty store (tests populate it directly)
    pub fn new() -> Self {
        Self {
            planets: HashMap::new(),
        }
    }

    /// Load the store from a Kepler archive CSV file
    ///
    /// Rows that are not confirmed habitable planets are skipped; malformed
    /// rows are logged and skipped rather than failing the whole ingest.
    pub async fn load_from_csv(csv_path: impl AsRef<Path>) -> Result<Self> {
        let csv_path = csv_path.as_ref();
        tracing::info!("Loading planet data from: {:?}", csv_path);

        let content = tokio::fs::read_to_string(csv_path).await?;

        let mut store = Self::new();
        store.parse_csv(&content)?;

        tracing::info!("Loaded {} habitable planets", store.planets.len());
        Ok(store)
    }

    /// Parse CSV content (Kepler archive exports carry '#' comment headers)
    fn parse_csv(&mut self, content: &str) -> Result<()> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .comment(Some(b'#'))
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut row_count = 0;
        let mut error_count = 0;

        for result in reader.deserialize::<KeplerCsvRow>() {
            row_count += 1;

            match result {
                Ok(row) => {
                    if !row.is_habitable() {
                        continue;
                    }
                    if let Some(name) = row.kepler_name {
                        self.planets.insert(name.clone(), Planet { kepler_name: name });
                    }
                }
                Err(e) => {
                    error_count += 1;
                    tracing::warn!("Error parsing CSV row {}: {}", row_count, e);
                }
            }
        }

        if error_count > 0 {
            tracing::warn!("Skipped {} malformed CSV rows", error_count);
        }

        Ok(())
    }

    /// Insert a planet directly (ingest helper, also used by tests)
    pub fn insert(&mut self, planet: Planet) {
        self.planets.insert(planet.kepler_name.clone(), planet);
    }

    /// Look up a planet by its kepler name
    pub fn find(&self, kepler_name: &str) -> Option<&Planet> {
        self.planets.get(kepler_name)
    }

    /// Number of planets in the store
    pub fn count(&self) -> usize {
        self.planets.len()
    }
}

impl Default for PlanetStore {
    fn default() -> Self {
        Self::new()
    }
}
