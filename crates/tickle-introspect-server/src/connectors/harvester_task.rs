//! Tickle harvester task connector

use async_trait::async_trait;
use reqwest::Client;

use super::{check_status, join_url, ConnectorError, ConnectorResult, HarvestTaskService};
use crate::models::HarvestRequest;

const SERVICE: &str = "tickle harvester";

/// Client for the tickle harvester's task resource
#[derive(Clone)]
pub struct HarvesterTaskClient {
    client: Client,
    base_url: String,
}

impl HarvesterTaskClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn task_url(&self, harvester_id: i64) -> String {
        join_url(&self.base_url, &format!("harvest-tasks/{harvester_id}"))
    }
}

#[async_trait]
impl HarvestTaskService for HarvesterTaskClient {
    #[tracing::instrument(skip(self, request), fields(records = request.records().len()))]
    async fn create_harvest_task(
        &self,
        harvester_id: i64,
        request: &HarvestRequest,
    ) -> ConnectorResult<()> {
        let response = self
            .client
            .post(self.task_url(harvester_id))
            .json(request)
            .send()
            .await
            .map_err(|source| ConnectorError::Transport {
                service: SERVICE,
                source,
            })?;

        check_status(SERVICE, response).await?;

        Ok(())
    }
}
