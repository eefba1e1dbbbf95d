//! Generates a synthetic Google-style location history file.
//!
//! Run with:
//! ```
//! cargo run -p location-fixtures --bin generate-history -- --records 1000
//! ```

use std::path::PathBuf;

use clap::Parser;
use location_fixtures::config::GeneratorConfig;
use location_fixtures::writer::generate_file;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "generate-history", about = "Synthetic location-history fixture generator")]
struct Args {
    /// Where to write the generated document.
    #[arg(long, default_value = "google_history.json")]
    output: PathBuf,

    /// Number of records to generate.
    #[arg(long, default_value_t = 1_000_000)]
    records: u64,

    /// Nominal spacing between records, in seconds.
    #[arg(long, default_value_t = 60)]
    interval_seconds: i64,

    /// Timestamp of the first record, in milliseconds since the epoch.
    #[arg(long, default_value_t = 1_379_129_160_146)]
    start_timestamp_ms: i64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = GeneratorConfig {
        record_count: args.records,
        interval_seconds: args.interval_seconds,
        start_timestamp_ms: args.start_timestamp_ms,
    };

    let written = generate_file(&args.output, &config)?;

    tracing::info!("Generation completed!");
    tracing::info!("  Records: {}", written);
    tracing::info!("  Output: {}", args.output.display());

    Ok(())
}
