///! Launch module - persistence and business rules for launch records
///!
///! The store is seeded once from the SpaceX API; afterwards callers list,
///! schedule and abort launches through `LaunchService`.

pub mod api_client;
pub mod service;
pub mod store;
pub mod types;

pub use api_client::SpaceXClient;
pub use service::LaunchService;
pub use store::LaunchStore;
pub use types::{Launch, ScheduleLaunchRequest};
