//! Harvester commands

pub mod request_harvest;

pub use request_harvest::{RequestHarvestCommand, RequestHarvestError};
