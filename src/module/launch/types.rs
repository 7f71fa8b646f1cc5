///! Launch data types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// First flight number handed out when the store is empty
pub const DEFAULT_FLIGHT_NUMBER: u32 = 100;

/// Customers attached to every launch scheduled through this service
pub const DEFAULT_CUSTOMERS: &[&str] = &["Zero to Mastery", "NASA"];

/// The historical record whose presence marks the store as already seeded
pub const SENTINEL_FLIGHT_NUMBER: u32 = 1;
pub const SENTINEL_ROCKET: &str = "Falcon 1";
pub const SENTINEL_MISSION: &str = "FalconSat";

/// A launch record as persisted in the launch store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Launch {
    /// Unique key, assigned by the service for scheduled launches
    pub flight_number: u32,

    /// Mission / payload name
    pub mission: String,

    /// Launch vehicle name
    pub rocket: String,

    /// Launch date as provided by the source or the caller
    pub launch_date: DateTime<Utc>,

    /// Customer names, in payload order
    #[serde(default)]
    pub customers: Vec<String>,

    /// True until the launch is resolved (flown or aborted)
    pub upcoming: bool,

    /// True on a successful flight; false once aborted or on a failed one
    pub success: bool,
}

/// Caller-supplied input for scheduling a new launch
///
/// `target` is validated against the planet store and never persisted; the
/// service fills in flight number, flags and customers.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleLaunchRequest {
    /// Kepler name of the destination planet
    pub target: String,
    pub mission: String,
    pub rocket: String,
    pub launch_date: DateTime<Utc>,
}

impl Launch {
    /// Build the persisted record for a scheduling request
    ///
    /// Applies the server-side defaults: the assigned flight number, the
    /// fixed customer list, and the upcoming/success flags.
    pub fn from_schedule_request(request: ScheduleLaunchRequest, flight_number: u32) -> Self {
        Self {
            flight_number,
            mission: request.mission,
            rocket: request.rocket,
            launch_date: request.launch_date,
            customers: DEFAULT_CUSTOMERS.iter().map(|c| c.to_string()).collect(),
            upcoming: true,
            success: true,
        }
    }

    /// Whether this record is the seeding sentinel (flight 1, Falcon 1 /
    /// FalconSat)
    pub fn is_seed_sentinel(&self) -> bool {
        self.flight_number == SENTINEL_FLIGHT_NUMBER
            && self.rocket == SENTINEL_ROCKET
            && self.mission == SENTINEL_MISSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_schedule_request_applies_defaults() {
        let request = ScheduleLaunchRequest {
            target: "Kepler-442 b".to_string(),
            mission: "M1".to_string(),
            rocket: "R1".to_string(),
            launch_date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        };

        let launch = Launch::from_schedule_request(request, 100);

        assert_eq!(launch.flight_number, 100);
        assert!(launch.upcoming);
        assert!(launch.success);
        assert_eq!(launch.customers, vec!["Zero to Mastery", "NASA"]);
    }

    #[test]
    fn test_seed_sentinel_match() {
        let launch = Launch {
            flight_number: 1,
            mission: "FalconSat".to_string(),
            rocket: "Falcon 1".to_string(),
            launch_date: Utc::now(),
            customers: vec![],
            upcoming: false,
            success: false,
        };
        assert!(launch.is_seed_sentinel());

        let other = Launch {
            flight_number: 1,
            mission: "DemoSat".to_string(),
            ..launch
        };
        assert!(!other.is_seed_sentinel());
    }
}
