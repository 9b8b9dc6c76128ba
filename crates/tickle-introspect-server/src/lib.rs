//! Tickle Repo Introspection Server
//!
//! HTTP service for inspecting a tickle repo: datasets, their record counts and individual
//! records, plus the tickle harvester configurations held by the flow store. Harvest requests
//! posted here are relayed to the tickle harvester.
//!
//! # Architecture
//!
//! - [`features`]: vertical slices with queries, commands and routes
//! - [`store`]: read-only access to the tickle repo behind the [`store::RecordStore`] trait
//! - [`connectors`]: HTTP clients for the flow store and the tickle harvester
//! - [`dto`]: wire shapes and the record content renderings
//! - [`api`]: router assembly, middleware and server lifecycle
//!
//! All API routes live under `/api/v1`; `/health` sits outside the prefix.
//!
//! # Example
//!
//! ```no_run
//! use tickle_introspect_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod connectors;
pub mod cqrs;
pub mod dto;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;
pub mod store;

pub use error::{AppError, AppResult};
