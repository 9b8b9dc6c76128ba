//! Get record query
//!
//! Resolves a composite `<dataset name>:<local id>` to a record. A malformed id, an unknown
//! dataset and an unknown local id all yield `Ok(None)`.

use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::dto::{record_to_dto, RecordDto};
use crate::error::AppError;
use crate::features::records::record_id::RecordId;
use crate::store::{SharedRecordStore, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRecordQuery {
    pub record_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GetRecordError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<GetRecordError> for AppError {
    fn from(err: GetRecordError) -> Self {
        match err {
            GetRecordError::Store(e) => AppError::Store(e),
        }
    }
}

impl Request<Result<Option<RecordDto>, GetRecordError>> for GetRecordQuery {}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedRecordStore,
    query: GetRecordQuery,
) -> Result<Option<RecordDto>, GetRecordError> {
    let Some(id) = RecordId::parse(&query.record_id) else {
        tracing::debug!("Record id has no dataset separator");
        return Ok(None);
    };

    let Some(dataset) = store.lookup_dataset_by_name(id.dataset_name).await? else {
        tracing::debug!(dataset = id.dataset_name, "Unknown dataset");
        return Ok(None);
    };

    let record = store.lookup_record(dataset.id, id.local_id).await?;

    Ok(record.map(record_to_dto))
}
