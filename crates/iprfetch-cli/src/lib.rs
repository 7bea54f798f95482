//! iprfetch Library
//!
//! Fetches InterPro domain annotations for a list of UniProt accessions and
//! flattens them into CSV rows.
//!
//! # Pipeline
//!
//! - **reader**: streams identifiers from the input CSV (first column)
//! - **api**: one GET per identifier against the InterPro entry/protein
//!   endpoint, typed response model
//! - **extract**: flattens each response entry into a fixed 10-field record
//! - **writer**: appends records to the output CSV (append-only, no header)
//! - **pipeline**: drives the loop and skips identifiers that fail

pub mod api;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod reader;
pub mod writer;

// Re-export commonly used types
pub use error::{CliError, Result};
