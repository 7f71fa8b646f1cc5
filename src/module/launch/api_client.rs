///! SpaceX API client for fetching historical launch data
///!
///! Used exactly once, at startup, to seed the launch store. One POST to the
///! launches query endpoint with pagination disabled returns the full
///! history in a single response.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const REQUEST_TIMEOUT_SECONDS: u64 = 60;

pub const SPACEX_API_URL: &str = "https://api.spacexdata.com/v4/launches/query";

/// One launch document from the query response
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchDoc {
    pub flight_number: u32,
    /// Mission name
    pub name: String,
    pub date_local: chrono::DateTime<chrono::Utc>,
    pub upcoming: bool,
    /// Null for launches that have not flown yet
    pub success: Option<bool>,
    pub rocket: RocketDoc,
    #[serde(default)]
    pub payloads: Vec<PayloadDoc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RocketDoc {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayloadDoc {
    #[serde(default)]
    pub customers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LaunchQueryResponse {
    docs: Vec<LaunchDoc>,
}

impl LaunchDoc {
    /// Per-payload customer lists flattened into one sequence
    pub fn all_customers(&self) -> Vec<String> {
        self.payloads
            .iter()
            .flat_map(|payload| payload.customers.iter().cloned())
            .collect()
    }
}

/// Client for the SpaceX v4 launches query endpoint
pub struct SpaceXClient {
    client: reqwest::Client,
    api_url: String,
}

impl SpaceXClient {
    /// Create a client against a custom endpoint URL
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// Fetch the full launch history in one unpaginated call
    ///
    /// Only the rocket name and per-payload customers are populated; a
    /// non-success status is a fatal error with no retry.
    pub async fn fetch_launches(&self) -> Result<Vec<LaunchDoc>> {
        let body = json!({
            "query": {},
            "options": {
                "pagination": false,
                "populate": [
                    { "path": "rocket", "select": { "name": 1 } },
                    { "path": "payloads", "select": { "customers": 1 } },
                ],
            },
        });

        let response = self.client.post(&self.api_url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Problem downloading launch data: HTTP {}", status);
            return Err(Error::Download { status });
        }

        let data: LaunchQueryResponse = response.json().await?;
        tracing::debug!("Fetched {} launch documents", data.docs.len());

        Ok(data.docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_launch_doc() {
        let raw = r#"{
            "flight_number": 1,
            "name": "FalconSat",
            "date_local": "2006-03-25T10:30:00+12:00",
            "upcoming": false,
            "success": false,
            "rocket": { "name": "Falcon 1" },
            "payloads": [
                { "customers": ["DARPA"] },
                { "customers": ["NASA", "NRO"] }
            ]
        }"#;

        let doc: LaunchDoc = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.flight_number, 1);
        assert_eq!(doc.rocket.name, "Falcon 1");
        assert_eq!(doc.all_customers(), vec!["DARPA", "NASA", "NRO"]);
    }

    #[test]
    fn test_parse_doc_with_null_success() {
        let raw = r#"{
            "flight_number": 200,
            "name": "Future Mission",
            "date_local": "2030-01-01T00:00:00-04:00",
            "upcoming": true,
            "success": null,
            "rocket": { "name": "Falcon 9" }
        }"#;

        let doc: LaunchDoc = serde_json::from_str(raw).unwrap();
        assert!(doc.upcoming);
        assert!(doc.success.is_none());
        assert!(doc.all_customers().is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires network connection
    async fn test_fetch_launches_live() {
        let client = SpaceXClient::new(SPACEX_API_URL).unwrap();
        let docs = client.fetch_launches().await.unwrap();
        assert!(!docs.is_empty());
    }
}
