//! Fetch pipeline
//!
//! The driver loop: read identifiers, fetch annotations, flatten, append.
//! Strictly sequential, one identifier processed to completion before the
//! next begins. Per-identifier failures are logged and skipped; only an
//! unopenable input or an output write failure aborts the run.

use crate::api::InterProClient;
use crate::error::Result;
use crate::extract;
use crate::reader::QueryReader;
use crate::writer;
use std::path::Path;
use tracing::{debug, error, info};

/// Pipeline statistics
#[derive(Debug, Default, Clone)]
pub struct PipelineStats {
    /// Identifiers pulled from the input CSV
    pub queries: usize,
    /// Flat records appended to the output CSV
    pub rows_written: usize,
    /// Identifiers (or input rows) that failed and were skipped
    pub failures: usize,
}

/// Run the full fetch pipeline over one input/output file pair
pub async fn run(client: &InterProClient, input: &Path, output: &Path) -> Result<PipelineStats> {
    let reader = QueryReader::open(input)?;
    let mut stats = PipelineStats::default();

    for query in reader {
        let query = match query {
            Ok(query) => query,
            Err(e) => {
                error!("Skipping unreadable input row: {}", e);
                stats.failures += 1;
                continue;
            },
        };

        stats.queries += 1;

        let response = match client.fetch_entries(&query).await {
            Ok(response) => response,
            Err(e) if e.is_api_status() => {
                error!("Error querying API for {}: {}", query, e);
                stats.failures += 1;
                continue;
            },
            Err(e) => {
                error!("Unexpected error querying API for {}: {}", query, e);
                stats.failures += 1;
                continue;
            },
        };

        let records = extract::extract_features(&response);
        writer::append_records(output, &records)?;

        debug!("Wrote {} rows for {}", records.len(), query);
        stats.rows_written += records.len();
    }

    info!(
        "Processed {} identifiers: {} rows written, {} failed",
        stats.queries, stats.rows_written, stats.failures
    );

    Ok(stats)
}
