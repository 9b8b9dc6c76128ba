//! Harvesters feature module
//!
//! Lists harvester configurations from the flow store and relays harvest requests to the
//! tickle harvester.

pub mod commands;
pub mod queries;
pub mod routes;


pub use routes::{harvesters_routes, HarvesterState};
