use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a pipeline run.
///
/// Row-level problems are never reported here; the loader skips those rows.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("file not found at {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("could not open {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "required columns not found in CSV file (required: {}; found: {})",
        expected.join(", "),
        found.join(", ")
    )]
    MissingColumns {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("failed to read CSV header: {0}")]
    Header(#[source] csv::Error),

    #[error("failed while reading input: {0}")]
    Read(#[source] csv::Error),

    #[error("could not write diagram to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
