///! Error types for the launch backend

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Scheduling referenced a target planet that is not in the planet store
    #[error("No matching planet found for target '{target}'")]
    NoMatchingPlanet { target: String },

    /// The seeding download returned a non-success HTTP status
    #[error("Launch data download failed with HTTP status {status}")]
    Download { status: reqwest::StatusCode },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
