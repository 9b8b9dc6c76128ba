//! Record store access
//!
//! [`RecordStore`] is the read-only contract the features need from the tickle repo.
//! Lookups that find nothing return `Ok(None)` or an empty list; `Err` is reserved for
//! the store itself failing.

pub mod postgres;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{DataSet, DataSetSummary, Record};

pub use postgres::PgRecordStore;

/// Record store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQL query or connection error
    #[error("Record store query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A row came back in a shape the service cannot represent
    #[error("Corrupt row in record store: {0}")]
    Corrupt(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle shared by the route handlers
pub type SharedRecordStore = Arc<dyn RecordStore>;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Find a dataset by its unique name
    async fn lookup_dataset_by_name(&self, name: &str) -> StoreResult<Option<DataSet>>;

    /// Find the record with `local_id` inside the dataset with id `dataset_id`
    async fn lookup_record(&self, dataset_id: i32, local_id: &str) -> StoreResult<Option<Record>>;

    /// All datasets containing a record with `local_id`, in store order
    async fn datasets_by_local_id(&self, local_id: &str) -> StoreResult<Vec<DataSet>>;

    /// Record counts for every dataset, in store order
    async fn dataset_summaries(&self) -> StoreResult<Vec<DataSetSummary>>;

    /// Cheap round trip used by the health check
    async fn ping(&self) -> StoreResult<()>;
}
