//! Unified error type for the loading layer.

use std::path::PathBuf;

use hr_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to parse record in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The compiled-in reference table failed to parse. Only reachable if the
    /// embedded data is corrupted at build time.
    #[error("embedded reference table is malformed: {source}")]
    EmbeddedReference {
        #[source]
        source: csv::Error,
    },

    /// The compiled-in reference table is incomplete.
    #[error("embedded reference table is incomplete: {0}")]
    EmbeddedIncomplete(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
