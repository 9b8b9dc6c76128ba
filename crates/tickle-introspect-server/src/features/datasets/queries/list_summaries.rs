//! List dataset summaries query
//!
//! Full scan of per-dataset record counts. No paging or filtering: the number of datasets in
//! a tickle repo is small.

use mediator::Request;
use serde::{Deserialize, Serialize};

use crate::dto::{summaries_to_dto, DataSetSummaryListDto};
use crate::error::AppError;
use crate::store::{SharedRecordStore, StoreError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListDataSetSummariesQuery;

#[derive(Debug, thiserror::Error)]
pub enum ListDataSetSummariesError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ListDataSetSummariesError> for AppError {
    fn from(err: ListDataSetSummariesError) -> Self {
        match err {
            ListDataSetSummariesError::Store(e) => AppError::Store(e),
        }
    }
}

impl Request<Result<DataSetSummaryListDto, ListDataSetSummariesError>>
    for ListDataSetSummariesQuery
{
}

#[tracing::instrument(skip(store))]
pub async fn handle(
    store: SharedRecordStore,
    _query: ListDataSetSummariesQuery,
) -> Result<DataSetSummaryListDto, ListDataSetSummariesError> {
    let summaries = store.dataset_summaries().await?;
    tracing::debug!(count = summaries.len(), "Loaded dataset summaries");
    Ok(summaries_to_dto(summaries))
}
