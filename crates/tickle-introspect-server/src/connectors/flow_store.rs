//! Flow store connector

use async_trait::async_trait;
use reqwest::Client;

use super::{check_status, join_url, ConnectorError, ConnectorResult, HarvesterConfigStore};
use crate::models::HarvesterConfig;

const SERVICE: &str = "flow store";

/// Client for the flow store's harvester config resource
#[derive(Clone)]
pub struct FlowStoreClient {
    client: Client,
    base_url: String,
}

impl FlowStoreClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn configs_by_type_url(&self, config_type: &str) -> String {
        join_url(
            &self.base_url,
            &format!("harvester-configs/types/{config_type}"),
        )
    }
}

#[async_trait]
impl HarvesterConfigStore for FlowStoreClient {
    #[tracing::instrument(skip(self))]
    async fn harvester_configs_by_type(
        &self,
        config_type: &str,
    ) -> ConnectorResult<Vec<HarvesterConfig>> {
        let url = self.configs_by_type_url(config_type);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ConnectorError::Transport {
                service: SERVICE,
                source,
            })?;

        let configs = check_status(SERVICE, response)
            .await?
            .json::<Vec<HarvesterConfig>>()
            .await
            .map_err(|source| ConnectorError::Decode {
                service: SERVICE,
                source,
            })?;

        tracing::debug!(count = configs.len(), "Fetched harvester configs");

        Ok(configs)
    }
}
