//! Instance feature module
//!
//! Echoes the configured deployment label so clients can tell environments apart.

pub mod routes;

pub use routes::instance_routes;
