//! API client module
//!
//! HTTP client for the InterPro REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::InterProClient;
pub use types::*;
