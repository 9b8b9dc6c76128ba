//! HTTP server assembly: state, router, middleware stack and lifecycle

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tracing::info;

use crate::config::Config;
use crate::connectors::{
    build_http_client, FlowStoreClient, HarvestTaskService, HarvesterConfigStore,
    HarvesterTaskClient,
};
use crate::features::{self, HarvesterState};
use crate::middleware;
use crate::store::{postgres::create_pool, PgRecordStore, SharedRecordStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedRecordStore,
    pub configs: Arc<dyn HarvesterConfigStore>,
    pub tasks: Arc<dyn HarvestTaskService>,
    pub harvester_config_type: String,
    pub instance: Arc<str>,
}

impl AppState {
    /// Connect the collaborators described by `config`
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let pool = create_pool(&config.database).await?;
        info!("Tickle repo connection pool established");

        let client = build_http_client(Duration::from_secs(config.services.timeout_secs))?;
        let configs = FlowStoreClient::new(client.clone(), &config.services.flowstore_url);
        let tasks = HarvesterTaskClient::new(client, &config.services.tickle_harvester_url);

        Ok(Self {
            store: Arc::new(PgRecordStore::new(pool)),
            configs: Arc::new(configs),
            tasks: Arc::new(tasks),
            harvester_config_type: config.services.harvester_config_type.clone(),
            instance: Arc::from(config.instance.as_str()),
        })
    }
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState::connect(&config).await?;
    let app = create_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.server.shutdown_timeout_secs))
        .await?;

    info!("Server shut down gracefully");

    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState, config: &Config) -> Router {
    let feature_state = features::FeatureState {
        store: state.store.clone(),
        harvesters: HarvesterState {
            configs: state.configs.clone(),
            tasks: state.tasks.clone(),
            config_type: state.harvester_config_type.clone(),
        },
        instance: state.instance.clone(),
    };

    let feature_routes = features::router(feature_state);

    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
        .nest("/api/v1", feature_routes)
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Health check handler
async fn health_check(State(state): State<AppState>) -> Result<Response, StatusCode> {
    match state.store.ping().await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected"
            })),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Record store health check failed: {:?}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        },
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal(timeout_secs: u64) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }

    info!("Waiting up to {} seconds for connections to close", timeout_secs);
    tokio::time::sleep(Duration::from_secs(timeout_secs.min(5))).await;
}
