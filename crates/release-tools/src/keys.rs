//! First-token inventory for JSON exports.
//!
//! Pretty-printed location history exports put one key per line, so the
//! first word token of each line is (almost always) a key name. Collecting
//! the distinct first tokens gives a quick inventory of the keys a large
//! export actually uses, without parsing gigabytes of JSON.

use std::collections::BTreeSet;
use std::io::BufRead;

use regex::Regex;

/// Collects the distinct first word-token of every line, sorted.
pub fn first_tokens(src: impl BufRead) -> std::io::Result<BTreeSet<String>> {
    let word = Regex::new(r"\w+").expect("static pattern");
    let mut tokens = BTreeSet::new();

    for line in src.lines() {
        let line = line?;
        if let Some(m) = word.find(&line) {
            tokens.insert(m.as_str().to_string());
        }
    }

    Ok(tokens)
}
