//! List harvester configurations query
//!
//! Fetches every configuration of the tickle harvester type from the flow store and orders
//! them by name, ignoring case. Equal names keep their upstream order.

use mediator::Request;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;

use crate::connectors::{ConnectorError, HarvesterConfigStore};
use crate::dto::{harvesters_to_dto, HarvesterConfigListDto};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListHarvestersQuery {
    /// Flow store config type to list
    pub config_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ListHarvestersError {
    #[error(transparent)]
    Upstream(#[from] ConnectorError),
}

impl From<ListHarvestersError> for AppError {
    fn from(err: ListHarvestersError) -> Self {
        match err {
            ListHarvestersError::Upstream(e) => AppError::from(e),
        }
    }
}

impl Request<Result<HarvesterConfigListDto, ListHarvestersError>> for ListHarvestersQuery {}

/// Compare two names character by character after lowercasing
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[tracing::instrument(skip(configs))]
pub async fn handle(
    configs: Arc<dyn HarvesterConfigStore>,
    query: ListHarvestersQuery,
) -> Result<HarvesterConfigListDto, ListHarvestersError> {
    let found = configs
        .harvester_configs_by_type(&query.config_type)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list harvester configs");
            e
        })?;

    let mut harvesters = harvesters_to_dto(found);
    // slice::sort_by is stable
    harvesters.sort_by(|a, b| compare_ignore_case(&a.name, &b.name));

    Ok(HarvesterConfigListDto { harvesters })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::{sample_harvester, StaticConfigStore};

    fn query() -> ListHarvestersQuery {
        ListHarvestersQuery {
            config_type: "tickle".to_string(),
        }
    }

    #[test]
    fn test_compare_ignore_case() {
        assert_eq!(compare_ignore_case("Alpha", "alpha"), Ordering::Equal);
        assert_eq!(compare_ignore_case("alpha", "Beta"), Ordering::Less);
        assert_eq!(compare_ignore_case("Zeta", "beta"), Ordering::Greater);
        assert_eq!(compare_ignore_case("ab", "a"), Ordering::Greater);
    }

    #[tokio::test]
    async fn test_sorted_case_insensitively_and_stable() {
        let store = Arc::new(StaticConfigStore::new(vec![
            sample_harvester(1, "beta"),
            sample_harvester(2, "Alpha"),
            sample_harvester(3, "gamma"),
            sample_harvester(4, "alpha"),
        ]));

        let list = handle(store.clone(), query()).await.unwrap();

        let ids: Vec<_> = list.harvesters.iter().map(|h| h.id).collect();
        assert_eq!(ids, [2, 4, 1, 3]);
        assert_eq!(store.requested_types(), ["tickle"]);
    }

    #[tokio::test]
    async fn test_empty_upstream_is_empty_list() {
        let store = Arc::new(StaticConfigStore::new(vec![]));
        let list = handle(store, query()).await.unwrap();
        assert!(list.harvesters.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_an_error() {
        let store = Arc::new(StaticConfigStore::failing("flow store down"));
        let err = handle(store, query()).await.unwrap_err();
        assert!(matches!(err, ListHarvestersError::Upstream(_)));
    }
}
