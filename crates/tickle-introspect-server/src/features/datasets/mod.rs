//! Datasets feature module
//!
//! Dataset summaries and the reverse lookup from a local id to its datasets.

pub mod queries;
pub mod routes;

#[cfg(test)]
mod routes_test;

pub use routes::datasets_routes;
