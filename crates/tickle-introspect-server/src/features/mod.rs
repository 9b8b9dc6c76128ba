//! Feature modules implementing the introspection API
//!
//! Each feature is a vertical slice with its own queries or commands and routes:
//!
//! - **datasets**: dataset summaries and the reverse lookup by local id
//! - **records**: record lookup by composite `<dataset>:<local id>` id
//! - **harvesters**: harvester configuration listing and the harvest request relay
//! - **instance**: the deployment label
//!
//! Query and command types implement `mediator::Request`, so the same handlers can be driven
//! through [`crate::cqrs::build_mediator`].

pub mod datasets;
pub mod harvesters;
pub mod instance;
pub mod records;
pub mod shared;

use axum::Router;
use std::sync::Arc;

use crate::store::SharedRecordStore;

pub use harvesters::HarvesterState;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// Tickle repo record store
    pub store: SharedRecordStore,
    /// Flow store and tickle harvester connectors
    pub harvesters: HarvesterState,
    /// Deployment label
    pub instance: Arc<str>,
}

/// Creates the API router with all feature routes mounted
///
/// - `/instance` - deployment label
/// - `/datasets` - dataset summaries and reverse lookup
/// - `/records` - record lookup
/// - `/harvesters` - harvester configs and harvest requests
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/instance", instance::instance_routes().with_state(state.instance.clone()))
        .nest("/datasets", datasets::datasets_routes().with_state(state.store.clone()))
        .nest("/records", records::records_routes().with_state(state.store.clone()))
        .nest("/harvesters", harvesters::harvesters_routes().with_state(state.harvesters))
}
