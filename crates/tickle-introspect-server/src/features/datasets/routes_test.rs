//! Route tests for datasets

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::features::datasets::datasets_routes;
    use crate::features::shared::test_helpers::{sample_dataset, sample_record, InMemoryRecordStore};
    use crate::models::RecordStatus;
    use crate::store::SharedRecordStore;

    fn create_test_router(store: InMemoryRecordStore) -> Router {
        let store: SharedRecordStore = Arc::new(store);
        datasets_routes().with_state(store)
    }

    fn populated() -> InMemoryRecordStore {
        let mut reset = sample_record(3, 1, "00009999", "");
        reset.status = RecordStatus::Reset;

        InMemoryRecordStore::default()
            .with_dataset(sample_dataset(1, "125320-m21"))
            .with_dataset(sample_dataset(2, "150024-bibvagt"))
            .with_record(sample_record(1, 1, "00003196", ""))
            .with_record(sample_record(2, 2, "00003196", ""))
            .with_record(reset)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_list_summaries() {
        let (status, json) = get(create_test_router(populated()), "/").await;

        assert_eq!(status, StatusCode::OK);
        let summaries = json["dataSets"].as_array().unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0]["name"], "125320-m21");
        assert_eq!(summaries[0]["displayName"], "Display 125320-m21");
        assert_eq!(summaries[0]["sum"], 2);
        assert_eq!(summaries[0]["active"], 1);
        assert_eq!(summaries[0]["reset"], 1);
        assert_eq!(summaries[1]["sum"], 1);
    }

    #[tokio::test]
    async fn test_list_summaries_empty_store() {
        let (status, json) = get(create_test_router(InMemoryRecordStore::default()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["dataSets"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_datasets_by_local_id() {
        let (status, json) = get(create_test_router(populated()), "/by-local-id/00003196").await;

        assert_eq!(status, StatusCode::OK);
        let datasets = json["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0]["name"], "125320-m21");
        assert_eq!(datasets[0]["agencyId"], 125320);
        assert_eq!(datasets[1]["name"], "150024-bibvagt");
    }

    #[tokio::test]
    async fn test_datasets_by_unknown_local_id_is_empty() {
        let (status, json) = get(create_test_router(populated()), "/by-local-id/unknown").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["datasets"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_datasets_by_empty_local_id_is_empty() {
        let (status, json) = get(create_test_router(populated()), "/by-local-id/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["datasets"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_store_failure_is_500() {
        for uri in ["/", "/by-local-id/00003196"] {
            let (status, _) = get(create_test_router(InMemoryRecordStore::failing()), uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        }
    }
}
