///! Launch store - flight-number-keyed collection with a JSON file mirror
///!
///! Records live in an ordered in-memory map and are written back to
///! `launches.json` in the data directory after every mutation. Ordering by
///! flight number falls out of the map; listing is a skip/limit scan.

use crate::error::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::types::{Launch, DEFAULT_FLIGHT_NUMBER};

const STORE_FILE: &str = "launches.json";

/// Persistent collection of launch records keyed by flight number
pub struct LaunchStore {
    store_path: PathBuf,
    launches: RwLock<BTreeMap<u32, Launch>>,
}

impl LaunchStore {
    /// Open the store backed by `<data_dir>/launches.json`
    ///
    /// A missing file starts an empty store; an unreadable or unparsable
    /// file is an error.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        if !data_dir.exists() {
            fs::create_dir_all(data_dir).await?;
            info!("Created data directory: {:?}", data_dir);
        }

        let store_path = data_dir.join(STORE_FILE);
        let launches = if store_path.exists() {
            let content = fs::read_to_string(&store_path).await?;
            let launches: BTreeMap<u32, Launch> = serde_json::from_str(&content)?;
            info!("Loaded {} launches from {:?}", launches.len(), store_path);
            launches
        } else {
            debug!("Store file does not exist yet: {:?}", store_path);
            BTreeMap::new()
        };

        Ok(Self {
            store_path,
            launches: RwLock::new(launches),
        })
    }

    /// Write the current map back to the store file
    async fn persist(&self, launches: &BTreeMap<u32, Launch>) -> Result<()> {
        let content = serde_json::to_string_pretty(launches)?;
        fs::write(&self.store_path, content).await?;
        debug!("Saved {} launches to {:?}", launches.len(), self.store_path);
        Ok(())
    }

    /// Point lookup by flight number
    pub async fn get(&self, flight_number: u32) -> Option<Launch> {
        let launches = self.launches.read().await;
        launches.get(&flight_number).cloned()
    }

    /// Records in ascending flight-number order, after `skip`, at most
    /// `limit` of them; `limit == 0` means no limit
    pub async fn page(&self, skip: u64, limit: u64) -> Vec<Launch> {
        let launches = self.launches.read().await;
        let iter = launches.values().skip(skip as usize);
        if limit == 0 {
            iter.cloned().collect()
        } else {
            iter.take(limit as usize).cloned().collect()
        }
    }

    /// Insert or replace the record with this launch's flight number
    pub async fn upsert(&self, launch: Launch) -> Result<()> {
        let mut launches = self.launches.write().await;
        launches.insert(launch.flight_number, launch);
        self.persist(&launches).await
    }

    /// Upsert a batch of records with a single durable write at the end
    pub async fn upsert_many(&self, batch: Vec<Launch>) -> Result<usize> {
        let mut launches = self.launches.write().await;
        let count = batch.len();
        for launch in batch {
            launches.insert(launch.flight_number, launch);
        }
        self.persist(&launches).await?;
        Ok(count)
    }

    /// Assign the next flight number and insert in one step
    ///
    /// Both happen under the write lock, so two concurrent schedulers can
    /// never observe the same maximum and overwrite each other. Returns the
    /// persisted record.
    pub async fn insert_next(&self, build: impl FnOnce(u32) -> Launch) -> Result<Launch> {
        let mut launches = self.launches.write().await;
        let flight_number = launches
            .last_key_value()
            .map(|(&max, _)| max + 1)
            .unwrap_or(DEFAULT_FLIGHT_NUMBER);

        let launch = build(flight_number);
        launches.insert(flight_number, launch.clone());
        self.persist(&launches).await?;
        Ok(launch)
    }

    /// Clear the upcoming/success flags on the matching record
    ///
    /// Returns true iff a record was modified: a missing flight number or a
    /// record whose flags are already cleared both report false.
    pub async fn mark_aborted(&self, flight_number: u32) -> Result<bool> {
        let mut launches = self.launches.write().await;

        let modified = match launches.get_mut(&flight_number) {
            Some(launch) if launch.upcoming || launch.success => {
                launch.upcoming = false;
                launch.success = false;
                true
            }
            _ => false,
        };

        if modified {
            self.persist(&launches).await?;
        }
        Ok(modified)
    }

    /// Number of records in the store
    pub async fn count(&self) -> usize {
        self.launches.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn sample_launch(flight_number: u32) -> Launch {
        Launch {
            flight_number,
            mission: format!("Mission {}", flight_number),
            rocket: "Test Rocket".to_string(),
            launch_date: Utc::now(),
            customers: vec!["NASA".to_string()],
            upcoming: true,
            success: true,
        }
    }

    #[tokio::test]
    async fn test_upsert_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = LaunchStore::open(temp_dir.path()).await.unwrap();

        store.upsert(sample_launch(100)).await.unwrap();
        let found = store.get(100).await.unwrap();
        assert_eq!(found.mission, "Mission 100");

        // Upsert with the same key replaces
        let mut replacement = sample_launch(100);
        replacement.mission = "Replaced".to_string();
        store.upsert(replacement).await.unwrap();
        assert_eq!(store.count().await, 1);
        assert_eq!(store.get(100).await.unwrap().mission, "Replaced");
    }

    #[tokio::test]
    async fn test_page_skip_limit() {
        let temp_dir = TempDir::new().unwrap();
        let store = LaunchStore::open(temp_dir.path()).await.unwrap();

        // Insert out of order; listing must come back sorted
        for flight_number in (100..110).rev() {
            store.upsert(sample_launch(flight_number)).await.unwrap();
        }

        let page = store.page(2, 3).await;
        let numbers: Vec<u32> = page.iter().map(|l| l.flight_number).collect();
        assert_eq!(numbers, vec![102, 103, 104]);

        // limit 0 means everything after skip
        assert_eq!(store.page(8, 0).await.len(), 2);
        assert_eq!(store.page(20, 0).await.len(), 0);
    }

    #[tokio::test]
    async fn test_insert_next_empty_store_starts_at_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = LaunchStore::open(temp_dir.path()).await.unwrap();

        let launch = store.insert_next(sample_launch).await.unwrap();
        assert_eq!(launch.flight_number, 100);

        let next = store.insert_next(sample_launch).await.unwrap();
        assert_eq!(next.flight_number, 101);
    }

    #[tokio::test]
    async fn test_insert_next_continues_from_max() {
        let temp_dir = TempDir::new().unwrap();
        let store = LaunchStore::open(temp_dir.path()).await.unwrap();

        store.upsert(sample_launch(150)).await.unwrap();
        store.upsert(sample_launch(120)).await.unwrap();

        let launch = store.insert_next(sample_launch).await.unwrap();
        assert_eq!(launch.flight_number, 151);
    }

    #[tokio::test]
    async fn test_mark_aborted() {
        let temp_dir = TempDir::new().unwrap();
        let store = LaunchStore::open(temp_dir.path()).await.unwrap();

        store.upsert(sample_launch(100)).await.unwrap();

        assert!(store.mark_aborted(100).await.unwrap());
        let aborted = store.get(100).await.unwrap();
        assert!(!aborted.upcoming);
        assert!(!aborted.success);

        // Second abort modifies nothing
        assert!(!store.mark_aborted(100).await.unwrap());

        // Missing flight number is a soft no
        assert!(!store.mark_aborted(999).await.unwrap());
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_open_missing_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = LaunchStore::open(temp_dir.path()).await.unwrap();
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_open_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store_path = temp_dir.path().join(STORE_FILE);
        fs::write(&store_path, "not json {").await.unwrap();

        assert!(LaunchStore::open(temp_dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_reopen_round_trips() {
        let temp_dir = TempDir::new().unwrap();

        {
            let store = LaunchStore::open(temp_dir.path()).await.unwrap();
            store
                .upsert_many(vec![sample_launch(100), sample_launch(101)])
                .await
                .unwrap();
        }

        let reopened = LaunchStore::open(temp_dir.path()).await.unwrap();
        assert_eq!(reopened.count().await, 2);
        assert_eq!(reopened.get(101).await.unwrap().flight_number, 101);
    }
}
