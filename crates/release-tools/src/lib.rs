//! Release workflow utilities.
//!
//! Two small line-oriented tools used around releases and fixture work:
//! extracting one version's section from the cumulative changelog, and
//! listing the distinct leading tokens of a JSON export to eyeball its key
//! inventory.

pub mod changelog;
pub mod keys;
