///! Launch service - seeding, listing, scheduling and aborting launches
///!
///! Composes the launch store, the planet reference store and the SpaceX
///! client. This is the surface a transport layer (HTTP, gRPC) would call.

use crate::error::{Error, Result};
use std::sync::Arc;
use tracing::info;

use super::api_client::{LaunchDoc, SpaceXClient};
use super::store::LaunchStore;
use super::types::{Launch, ScheduleLaunchRequest, SENTINEL_FLIGHT_NUMBER};
use crate::module::planet::PlanetStore;

pub struct LaunchService {
    launches: Arc<LaunchStore>,
    planets: Arc<PlanetStore>,
    api_client: SpaceXClient,
}

/// Shape a source document into the persisted record
fn launch_from_doc(doc: LaunchDoc) -> Launch {
    let customers = doc.all_customers();
    Launch {
        flight_number: doc.flight_number,
        mission: doc.name,
        rocket: doc.rocket.name,
        launch_date: doc.date_local,
        customers,
        upcoming: doc.upcoming,
        success: doc.success.unwrap_or(false),
    }
}

impl LaunchService {
    pub fn new(
        launches: Arc<LaunchStore>,
        planets: Arc<PlanetStore>,
        api_client: SpaceXClient,
    ) -> Self {
        Self {
            launches,
            planets,
            api_client,
        }
    }

    /// Idempotent first-run seeding from the SpaceX API
    ///
    /// If the sentinel record (flight 1, Falcon 1 / FalconSat) is already in
    /// the store the data was loaded on a previous run and nothing is
    /// fetched. A failed fetch is returned as-is and should abort startup.
    pub async fn load_launch_data(&self) -> Result<()> {
        if let Some(first) = self.launches.get(SENTINEL_FLIGHT_NUMBER).await {
            if first.is_seed_sentinel() {
                info!("Launch data already loaded");
                return Ok(());
            }
        }

        let docs = self.api_client.fetch_launches().await?;
        let count = self.seed_from_docs(docs).await?;
        info!("Seeded {} launches from the SpaceX API", count);
        Ok(())
    }

    /// Upsert a batch of source documents keyed by their flight numbers
    async fn seed_from_docs(&self, docs: Vec<LaunchDoc>) -> Result<usize> {
        let batch: Vec<Launch> = docs.into_iter().map(launch_from_doc).collect();
        self.launches.upsert_many(batch).await
    }

    /// Launches in ascending flight-number order; `limit == 0` is unlimited
    pub async fn get_all_launches(&self, skip: u64, limit: u64) -> Vec<Launch> {
        self.launches.page(skip, limit).await
    }

    /// Point lookup, used by callers as a precondition check before abort
    pub async fn is_launch_exists(&self, flight_number: u32) -> Option<Launch> {
        self.launches.get(flight_number).await
    }

    /// Validate the target planet, assign the next flight number and persist
    ///
    /// Returns the persisted record. An unknown target fails with
    /// `NoMatchingPlanet` and writes nothing.
    pub async fn schedule_new_launch(&self, request: ScheduleLaunchRequest) -> Result<Launch> {
        if self.planets.find(&request.target).is_none() {
            return Err(Error::NoMatchingPlanet {
                target: request.target,
            });
        }

        self.launches
            .insert_next(|flight_number| Launch::from_schedule_request(request, flight_number))
            .await
    }

    /// Mark the launch as no longer upcoming and unsuccessful
    ///
    /// True iff a record was modified; a missing flight number or an already
    /// aborted launch both report false.
    pub async fn abort_launch(&self, flight_number: u32) -> Result<bool> {
        self.launches.mark_aborted(flight_number).await
    }
}
