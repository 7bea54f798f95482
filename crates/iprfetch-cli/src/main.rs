//! iprfetch - InterPro annotation fetcher

use clap::Parser;
use iprfetch_cli::api::endpoints::INTERPRO_API_URL;
use iprfetch_cli::api::InterProClient;
use iprfetch_cli::pipeline;
use iprfetch_common::logging::{init_logging, LogConfig, LogLevel};
use std::path::PathBuf;
use std::process;
use tracing::error;

/// Fetch InterPro domain annotations for UniProt accessions
#[derive(Parser, Debug)]
#[command(name = "iprfetch")]
#[command(author, version, about)]
struct Cli {
    /// Input CSV, one identifier per row (first column)
    input_csv: PathBuf,

    /// Output CSV; flattened rows are appended, never overwritten
    output_csv: PathBuf,

    /// InterPro API base URL
    #[arg(long, default_value = INTERPRO_API_URL)]
    base_url: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    // Malformed arguments exit 1 with the usage text; --help/--version keep
    // their conventional exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let is_usage_error = e.use_stderr();
            let _ = e.print();
            process::exit(if is_usage_error { 1 } else { 0 });
        },
    };

    // Environment variables configure logging; --verbose raises the level
    let mut log_config = LogConfig::from_env().unwrap_or_default();
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }

    // The tool still works if logging cannot be initialized
    let _ = init_logging(&log_config);

    if let Err(e) = run(&cli).await {
        error!(error = %e, "Run failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Build the client and run the pipeline
async fn run(cli: &Cli) -> iprfetch_cli::Result<()> {
    let client = InterProClient::new(cli.base_url.clone())?;

    pipeline::run(&client, &cli.input_csv, &cli.output_csv).await?;

    Ok(())
}
