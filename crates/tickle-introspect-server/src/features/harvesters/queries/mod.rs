//! Harvester queries

pub mod list_configs;

pub use list_configs::{ListHarvestersError, ListHarvestersQuery};
