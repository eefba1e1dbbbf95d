//! Extracts one version's section from the cumulative changelog.
//!
//! Run with:
//! ```
//! cargo run -p release-tools --bin changelog-slice -- CHANGELOG.md changes.md 2.1.0
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use release_tools::changelog::slice_version;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "changelog-slice", about = "Copies one version's changelog section to its own file")]
struct Args {
    /// Cumulative changelog to read.
    source: PathBuf,

    /// File to write the extracted section to.
    target: PathBuf,

    /// Version whose section is extracted (matched against `# <version>` headers).
    version: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let src = File::open(&args.source)
        .with_context(|| format!("opening {}", args.source.display()))?;
    let target = File::create(&args.target)
        .with_context(|| format!("creating {}", args.target.display()))?;

    let written = slice_version(BufReader::new(src), target, &args.version)?;
    if written == 0 {
        anyhow::bail!("version {} not found in {}", args.version, args.source.display());
    }

    tracing::info!(
        "Wrote {} lines for version {} to {}",
        written,
        args.version,
        args.target.display()
    );
    Ok(())
}
