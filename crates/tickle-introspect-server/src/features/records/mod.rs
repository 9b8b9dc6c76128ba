//! Records feature module
//!
//! Lookup of a single record by its composite `<dataset name>:<local id>` identifier.

pub mod queries;
pub mod record_id;
pub mod routes;

#[cfg(test)]
mod routes_test;

pub use routes::records_routes;
