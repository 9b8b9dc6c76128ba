//! Tickle Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error and logging setup for the tickle repo introspect workspace.
//!
//! - **Error Handling**: [`TickleError`] and the [`Result`] alias
//! - **Logging**: tracing subscriber configuration in [`logging`]
//!
//! # Example
//!
//! ```no_run
//! use tickle_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     let _guard = init_logging(&config)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

pub use error::{Result, TickleError};
