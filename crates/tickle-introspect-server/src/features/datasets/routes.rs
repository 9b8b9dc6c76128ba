//! Dataset routes

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::queries::{
    by_local_id::handle as handle_by_local_id, list_summaries::handle as handle_list_summaries,
    DataSetsByLocalIdQuery, ListDataSetSummariesQuery,
};
use crate::dto::{DataSetListDto, DataSetSummaryListDto};
use crate::error::AppResult;
use crate::store::SharedRecordStore;

/// Create dataset routes
pub fn datasets_routes() -> Router<SharedRecordStore> {
    Router::new()
        .route("/", get(list_summaries))
        .route("/by-local-id/", get(datasets_by_empty_local_id))
        .route("/by-local-id/:local_id", get(datasets_by_local_id))
}

/// List record counts for every dataset
///
/// GET /datasets
async fn list_summaries(
    State(store): State<SharedRecordStore>,
) -> AppResult<Json<DataSetSummaryListDto>> {
    let list = handle_list_summaries(store, ListDataSetSummariesQuery).await?;
    Ok(Json(list))
}

/// List datasets holding a record with the given local id
///
/// GET /datasets/by-local-id/00003196
async fn datasets_by_local_id(
    State(store): State<SharedRecordStore>,
    Path(local_id): Path<String>,
) -> AppResult<Json<DataSetListDto>> {
    let list = handle_by_local_id(store, DataSetsByLocalIdQuery { local_id }).await?;
    Ok(Json(list))
}

/// An empty local id matches no dataset
///
/// GET /datasets/by-local-id/
async fn datasets_by_empty_local_id(
    State(store): State<SharedRecordStore>,
) -> AppResult<Json<DataSetListDto>> {
    datasets_by_local_id(State(store), Path(String::new())).await
}
