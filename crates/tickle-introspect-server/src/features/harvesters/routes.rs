//! Harvester routes

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use super::{
    commands::{request_harvest::handle as handle_request_harvest, RequestHarvestCommand},
    queries::{list_configs::handle as handle_list_configs, ListHarvestersQuery},
};
use crate::connectors::{HarvestTaskService, HarvesterConfigStore};
use crate::dto::{HarvestRequestListDto, HarvesterConfigListDto};
use crate::error::AppResult;

/// Collaborators needed by the harvester routes
#[derive(Clone)]
pub struct HarvesterState {
    pub configs: Arc<dyn HarvesterConfigStore>,
    pub tasks: Arc<dyn HarvestTaskService>,
    /// Flow store config type listed by `GET /harvesters`
    pub config_type: String,
}

/// Create harvester routes
pub fn harvesters_routes() -> Router<HarvesterState> {
    Router::new()
        .route("/", get(list_harvesters))
        .route("/request", post(request_harvest))
}

/// List tickle harvester configurations, sorted by name
///
/// GET /harvesters
async fn list_harvesters(
    State(state): State<HarvesterState>,
) -> AppResult<Json<HarvesterConfigListDto>> {
    let query = ListHarvestersQuery {
        config_type: state.config_type.clone(),
    };
    let list = handle_list_configs(state.configs.clone(), query).await?;
    Ok(Json(list))
}

/// Relay a batch of harvest requests to the tickle harvester
///
/// POST /harvesters/request
async fn request_harvest(
    State(state): State<HarvesterState>,
    Json(body): Json<HarvestRequestListDto>,
) -> AppResult<StatusCode> {
    let command = RequestHarvestCommand {
        requests: body.into_requests(),
    };
    handle_request_harvest(state.tasks.clone(), command).await?;
    Ok(StatusCode::OK)
}
