//! Tickle Repo Introspection Server - Main entry point

use anyhow::Result;
use tickle_common::logging::{init_logging, LogConfig};
use tracing::info;

use tickle_introspect_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    let log_config = LogConfig::builder()
        .log_file_prefix("tickle-introspect")
        .filter_directives("tickle_introspect_server=debug,tower_http=debug,sqlx=warn,reqwest=info")
        .build()
        .merge_env()?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting tickle repo introspection server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    api::serve(config).await
}
