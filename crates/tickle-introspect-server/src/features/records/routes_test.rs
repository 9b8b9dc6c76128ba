//! Route tests for record lookup

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::features::records::records_routes;
    use crate::features::shared::test_helpers::{sample_dataset, sample_record, InMemoryRecordStore};
    use crate::store::SharedRecordStore;

    fn create_test_router(store: InMemoryRecordStore) -> Router {
        let store: SharedRecordStore = Arc::new(store);
        records_routes().with_state(store)
    }

    fn populated() -> InMemoryRecordStore {
        InMemoryRecordStore::default()
            .with_dataset(sample_dataset(1, "125320-m21"))
            .with_record(sample_record(7, 1, "00003196", "<a/>"))
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
    async fn test_get_record_found() {
        let (status, json) = get(create_test_router(populated()), "/125320-m21:00003196").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], 7);
        assert_eq!(json["dataset"], 1);
        assert_eq!(json["localId"], "00003196");
        assert_eq!(json["trackingId"], "track-7");
        assert_eq!(json["checksum"], "sum-7");
        assert_eq!(json["status"], "ACTIVE");
    }

    #[tokio::test]
    async fn test_get_record_percent_encoded_separator() {
        let (status, json) = get(create_test_router(populated()), "/125320-m21%3A00003196").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], 7);
    }

    #[tokio::test]
    async fn test_get_record_absent_is_null() {
        for uri in ["/nosuchds:x", "/no-colon-here", "/125320-m21:nope"] {
            let (status, json) = get(create_test_router(populated()), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(json.is_null(), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_get_record_store_failure() {
        let (status, _) = get(
            create_test_router(InMemoryRecordStore::failing()),
            "/125320-m21:00003196",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
