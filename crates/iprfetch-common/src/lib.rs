//! iprfetch Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared infrastructure for the iprfetch workspace.
//!
//! Currently this holds the logging configuration and initialization used by
//! the CLI. Use the `tracing` macros (`debug!`, `info!`, `warn!`, `error!`)
//! for all output that is not part of the tool's data stream.
//!
//! # Example
//!
//! ```no_run
//! use iprfetch_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     Ok(())
//! }
//! ```

pub mod logging;
