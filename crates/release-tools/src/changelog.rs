//! Per-version changelog extraction.
//!
//! The global `CHANGELOG.md` holds every release under `# <version>`
//! headers. Release creation wants a file with only the section for the
//! version at hand, so this copies the lines between that version's header
//! and the next `# ` header.

use std::io::{BufRead, Write};

/// Copies the section for `version` from `src` to `out`.
///
/// A line starting with `"# " + version` opens the section (header line
/// included); the next line starting with `"# "` closes it. Lines before a
/// matching header are skipped. Returns the number of lines written, which
/// is zero when the version does not appear.
pub fn slice_version(
    src: impl BufRead,
    mut out: impl Write,
    version: &str,
) -> std::io::Result<usize> {
    let header = format!("# {version}");
    let mut in_section = false;
    let mut written = 0;

    for line in src.lines() {
        let line = line?;
        if line.starts_with(&header) {
            in_section = true;
        } else if line.starts_with("# ") {
            in_section = false;
        }
        if in_section {
            writeln!(out, "{line}")?;
            written += 1;
        }
    }

    Ok(written)
}
