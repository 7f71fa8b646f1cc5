use serde::{Deserialize, Serialize};

/// A habitable planet candidate from the Kepler archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    /// Kepler designation, e.g. "Kepler-442 b"
    pub kepler_name: String,
}

/// One row of the Kepler exoplanet archive CSV (only the columns we read)
#[derive(Debug, Clone, Deserialize)]
pub struct KeplerCsvRow {
    pub kepler_name: Option<String>,
    /// Disposition, e.g. "CONFIRMED" / "CANDIDATE" / "FALSE POSITIVE"
    pub koi_disposition: String,
    /// Stellar insolation flux (Earth = 1.0)
    pub koi_insol: Option<f64>,
    /// Planetary radius (Earth radii)
    pub koi_prad: Option<f64>,
}

impl KeplerCsvRow {
    /// Confirmed planets receiving roughly Earth-like stellar flux, small
    /// enough to be rocky
    pub fn is_habitable(&self) -> bool {
        self.koi_disposition == "CONFIRMED"
            && self
                .koi_insol
                .map_or(false, |insol| (0.36..=1.11).contains(&insol))
            && self.koi_prad.map_or(false, |prad| prad < 1.6)
    }
}
