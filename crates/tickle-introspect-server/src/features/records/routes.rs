//! Record routes

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::queries::{get_by_record_id::handle as handle_get_record, GetRecordQuery};
use crate::dto::RecordDto;
use crate::error::AppResult;
use crate::store::SharedRecordStore;

/// Create record routes
pub fn records_routes() -> Router<SharedRecordStore> {
    Router::new().route("/:record_id", get(get_record))
}

/// Get a record by composite id
///
/// GET /records/125320-m21:00003196
///
/// Responds `200` with the record, or `200` with `null` when nothing matches.
async fn get_record(
    State(store): State<SharedRecordStore>,
    Path(record_id): Path<String>,
) -> AppResult<Json<Option<RecordDto>>> {
    let record = handle_get_record(store, GetRecordQuery { record_id }).await?;
    Ok(Json(record))
}
