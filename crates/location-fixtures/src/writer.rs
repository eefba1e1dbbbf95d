//! Streaming document assembly.
//!
//! The output document is a single JSON object with one `locations` array.
//! Records are serialized one at a time straight into the output stream, so
//! memory use stays flat regardless of how many records are requested.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::record::LocationRecord;

/// Records between progress log lines.
const PROGRESS_CHUNK: u64 = 100_000;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("record count must be at least 1")]
    InvalidRecordCount,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Streams the full history document to `out`.
///
/// Validates the configuration before writing anything, then emits
/// `{"locations": [` followed by the records in index order and the closing
/// `]}`. Returns the number of records written. A failed write leaves a
/// partial document behind; this is a fixture tool, not a service, so the
/// caller simply reruns it.
pub fn write_history<W: Write>(config: &GeneratorConfig, out: W) -> Result<u64, GenerateError> {
    config.validate()?;

    let mut out = BufWriter::new(out);
    out.write_all(b"{\"locations\": [")?;

    for index in 0..config.record_count {
        if index > 0 {
            out.write_all(b", ")?;
        }
        let record = LocationRecord::at_index(index, config);
        serde_json::to_writer(&mut out, &record)?;

        if index > 0 && index % PROGRESS_CHUNK == 0 {
            debug!(records = index, "generation progress");
        }
    }

    out.write_all(b"]}")?;
    out.flush()?;

    Ok(config.record_count)
}

/// Generates a history file at `path`.
///
/// The file is created (truncating any existing content), written
/// incrementally, and closed when the writer is dropped.
pub fn generate_file(
    path: impl AsRef<Path>,
    config: &GeneratorConfig,
) -> Result<u64, GenerateError> {
    let path = path.as_ref();
    config.validate()?;

    let file = File::create(path)?;
    let written = write_history(config, file)?;

    info!(
        records = written,
        path = %path.display(),
        "history fixture written"
    );
    Ok(written)
}
