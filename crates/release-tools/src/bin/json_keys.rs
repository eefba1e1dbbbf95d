//! Lists the distinct first tokens of a JSON export.
//!
//! Run with:
//! ```
//! cargo run -p release-tools --bin json-keys -- google_history.json
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use release_tools::keys::first_tokens;

#[derive(Parser, Debug)]
#[command(name = "json-keys", about = "Prints the distinct leading tokens of a file, with lengths")]
struct Args {
    /// File to scan.
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let file = File::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let tokens = first_tokens(BufReader::new(file))?;

    for token in &tokens {
        println!("{} : {}", token, token.len());
    }
    Ok(())
}
