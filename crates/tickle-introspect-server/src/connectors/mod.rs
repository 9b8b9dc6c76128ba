//! HTTP connectors for the external dataio services
//!
//! - [`flow_store::FlowStoreClient`] lists harvester configurations
//! - [`harvester_task::HarvesterTaskClient`] creates harvest tasks
//!
//! Both share one `reqwest::Client` whose timeout is the only deadline applied to upstream
//! calls. Nothing here retries.

pub mod flow_store;
pub mod harvester_task;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use thiserror::Error;

use crate::models::{HarvestRequest, HarvesterConfig};

pub use flow_store::FlowStoreClient;
pub use harvester_task::HarvesterTaskClient;

/// Failures talking to an external service
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// Transport failure: connection refused, timeout, broken body
    #[error("{service} unreachable: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("{service} responded {status}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The service answered 2xx with a body we could not decode
    #[error("{service} returned an unreadable response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Source of harvester configurations
#[async_trait]
pub trait HarvesterConfigStore: Send + Sync {
    async fn harvester_configs_by_type(&self, config_type: &str)
        -> ConnectorResult<Vec<HarvesterConfig>>;
}

/// Sink for harvest tasks
#[async_trait]
pub trait HarvestTaskService: Send + Sync {
    async fn create_harvest_task(
        &self,
        harvester_id: i64,
        request: &HarvestRequest,
    ) -> ConnectorResult<()>;
}

/// Build the HTTP client shared by the connectors
pub fn build_http_client(timeout: Duration) -> ConnectorResult<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| ConnectorError::Transport {
            service: "http client",
            source,
        })
}

/// Join a base URL and a path without doubling or dropping the slash
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Turn a non-2xx response into [`ConnectorError::Status`], keeping the body as the message
pub(crate) async fn check_status(
    service: &'static str,
    response: Response,
) -> ConnectorResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ConnectorError::Status {
        service,
        status,
        body,
    })
}
