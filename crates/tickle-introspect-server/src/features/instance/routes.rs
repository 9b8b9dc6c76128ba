//! Instance routes

use axum::{extract::State, routing::get, Router};
use std::sync::Arc;

/// Create instance routes
pub fn instance_routes() -> Router<Arc<str>> {
    Router::new().route("/", get(instance))
}

/// GET /instance
#[tracing::instrument(skip_all)]
async fn instance(State(label): State<Arc<str>>) -> String {
    label.to_string()
}
