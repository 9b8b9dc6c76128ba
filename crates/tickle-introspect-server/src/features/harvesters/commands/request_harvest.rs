//! Request harvest command
//!
//! Relays a batch of harvest requests to the tickle harvester, one item at a time in input
//! order. The first item that fails to convert or to submit ends the batch. Items submitted
//! before the failure stay submitted; nothing is rolled back.

use mediator::Request;
use serde::Deserialize;
use std::sync::Arc;

use crate::connectors::{ConnectorError, HarvestTaskService};
use crate::dto::{harvest_request_from_dto, HarvestRequestDto, HarvestRequestDtoError};
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct RequestHarvestCommand {
    pub requests: Vec<HarvestRequestDto>,
}

#[derive(Debug, thiserror::Error)]
pub enum RequestHarvestError {
    #[error(transparent)]
    Invalid(#[from] HarvestRequestDtoError),

    #[error(transparent)]
    Upstream(#[from] ConnectorError),
}

impl From<RequestHarvestError> for AppError {
    fn from(err: RequestHarvestError) -> Self {
        match err {
            RequestHarvestError::Invalid(e) => AppError::from(e),
            RequestHarvestError::Upstream(e) => AppError::from(e),
        }
    }
}

impl Request<Result<(), RequestHarvestError>> for RequestHarvestCommand {}

#[tracing::instrument(skip(tasks, command), fields(items = command.requests.len()))]
pub async fn handle(
    tasks: Arc<dyn HarvestTaskService>,
    command: RequestHarvestCommand,
) -> Result<(), RequestHarvestError> {
    for (position, dto) in command.requests.iter().enumerate() {
        let request = harvest_request_from_dto(dto).map_err(|e| {
            tracing::warn!(position, harvester_id = dto.harvester_id, error = %e, "Rejected harvest request");
            e
        })?;

        tasks
            .create_harvest_task(dto.harvester_id, &request)
            .await
            .map_err(|e| {
                tracing::error!(position, harvester_id = dto.harvester_id, error = %e, "Failed to create harvest task");
                e
            })?;

        tracing::info!(
            harvester_id = dto.harvester_id,
            records = request.records().len(),
            "Created harvest task"
        );
    }

    Ok(())
}
