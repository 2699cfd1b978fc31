//! Error types for loading data and driving the command line.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DegreesError>;

#[derive(Error, Debug)]
pub enum DegreesError {
    /// A dataset file could not be opened or its header read.
    #[error("can't read {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Reading an answer from piped stdin, or flushing a prompt, failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// A typed name matched nobody, or an ambiguous name got a bad pick.
    #[error("person not found: {0}")]
    PersonNotFound(String),
}
