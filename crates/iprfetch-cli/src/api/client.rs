//! HTTP client for the InterPro API
//!
//! One blocking-style GET per identifier, no retries, no backoff, transport
//! default timeout. A failed lookup is an `Err`, never a silent null: the
//! pipeline decides whether to skip or abort.

use crate::api::{endpoints, types::EntryResponse};
use crate::error::{CliError, Result};
use reqwest::Client;
use tracing::debug;

/// API client for the InterPro REST service
pub struct InterProClient {
    client: Client,
    base_url: String,
}

impl InterProClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch all entries annotated on one UniProt identifier.
    ///
    /// Returns `CliError::ApiStatus` for a non-success HTTP status and the
    /// matching transport/parse variant for anything else that goes wrong.
    pub async fn fetch_entries(&self, query: &str) -> Result<EntryResponse> {
        let url = endpoints::entry_protein_url(&self.base_url, query);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CliError::api_status(query, status));
        }

        // Decode the body ourselves so a malformed payload surfaces as a
        // JSON parse error with the offending text available to the caller
        let body = response.text().await?;
        let parsed: EntryResponse = serde_json::from_str(&body)?;

        Ok(parsed)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
