//! Synthetic location-history fixture generation.
//!
//! This crate produces large Google-style JSON location history files for
//! testing. Every record is a pure function of its index and a fixed
//! configuration, so generated fixtures are fully reproducible without a
//! random seed, and the document is streamed to the output so a
//! multi-million-record file never has to fit in memory.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use location_fixtures::prelude::*;
//!
//! let config = GeneratorConfig {
//!     record_count: 10_000,
//!     ..Default::default()
//! };
//! generate_file("google_history.json", &config)?;
//! ```

pub mod config;
pub mod record;
pub mod rules;
pub mod writer;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::GeneratorConfig;
    pub use crate::record::{
        ACTIVITY_CLASSIFICATIONS, ActivityEntry, ActivitySample, LocationRecord, RecordShape,
        SHAPE_ROTATION,
    };
    pub use crate::writer::{GenerateError, generate_file, write_history};
}
