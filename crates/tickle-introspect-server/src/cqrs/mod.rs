//! Mediator wiring for the feature handlers
//!
//! Registers every query and command handler with its collaborator, so callers outside the
//! HTTP layer can dispatch the same requests the routes serve.

pub use mediator::DefaultAsyncMediator;
use std::sync::Arc;

use crate::connectors::{HarvestTaskService, HarvesterConfigStore};
use crate::store::SharedRecordStore;

pub type AppMediator = DefaultAsyncMediator;

pub fn build_mediator(
    store: SharedRecordStore,
    configs: Arc<dyn HarvesterConfigStore>,
    tasks: Arc<dyn HarvestTaskService>,
) -> AppMediator {
    DefaultAsyncMediator::builder()
        // Records
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::records::queries::get_by_record_id::handle(store, query).await }
            }
        })
        // Datasets
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::datasets::queries::list_summaries::handle(store, query).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::datasets::queries::by_local_id::handle(store, query).await }
            }
        })
        // Harvesters
        .add_handler({
            let configs = configs.clone();
            move |query| {
                let configs = configs.clone();
                async move { crate::features::harvesters::queries::list_configs::handle(configs, query).await }
            }
        })
        .add_handler({
            let tasks = tasks.clone();
            move |cmd| {
                let tasks = tasks.clone();
                async move { crate::features::harvesters::commands::request_harvest::handle(tasks, cmd).await }
            }
        })
        .build()
}
