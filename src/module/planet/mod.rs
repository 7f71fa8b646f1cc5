///! Planet reference data - read-only from the launch module's perspective

pub mod store;
pub mod types;

pub use store::PlanetStore;
pub use types::Planet;
