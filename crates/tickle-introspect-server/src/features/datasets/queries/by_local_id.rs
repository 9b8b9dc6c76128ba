//! Datasets by local id query
//!
//! Reverse lookup: which datasets hold a record with the given local id.

use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::dto::{datasets_to_dto, DataSetListDto};
use crate::error::AppError;
use crate::store::{SharedRecordStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSetsByLocalIdQuery {
    pub local_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DataSetsByLocalIdError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DataSetsByLocalIdError> for AppError {
    fn from(err: DataSetsByLocalIdError) -> Self {
        match err {
            DataSetsByLocalIdError::Store(e) => AppError::Store(e),
        }
    }
}

impl Request<Result<DataSetListDto, DataSetsByLocalIdError>> for DataSetsByLocalIdQuery {}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedRecordStore,
    query: DataSetsByLocalIdQuery,
) -> Result<DataSetListDto, DataSetsByLocalIdError> {
    if query.local_id.is_empty() {
        return Ok(datasets_to_dto(Vec::new()));
    }

    let datasets = store.datasets_by_local_id(&query.local_id).await?;
    Ok(datasets_to_dto(datasets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{sample_dataset, sample_record, InMemoryRecordStore};
    use std::sync::Arc;

    fn store() -> SharedRecordStore {
        Arc::new(
            InMemoryRecordStore::default()
                .with_dataset(sample_dataset(1, "125320-m21"))
                .with_dataset(sample_dataset(2, "870970-basis"))
                .with_dataset(sample_dataset(3, "150024-bibvagt"))
                .with_record(sample_record(1, 3, "00003196", ""))
                .with_record(sample_record(2, 1, "00003196", ""))
                .with_record(sample_record(3, 2, "other", "")),
        )
    }

    async fn lookup(local_id: &str) -> Vec<String> {
        handle(
            store(),
            DataSetsByLocalIdQuery {
                local_id: local_id.to_string(),
            },
        )
        .await
        .unwrap()
        .datasets
        .into_iter()
        .map(|d| d.name)
        .collect()
    }

    #[tokio::test]
    async fn test_reverse_lookup_keeps_store_order() {
        assert_eq!(lookup("00003196").await, ["125320-m21", "150024-bibvagt"]);
    }

    #[tokio::test]
    async fn test_no_match_and_empty_input_are_empty() {
        assert!(lookup("missing").await.is_empty());
        assert!(lookup("").await.is_empty());
    }
}
