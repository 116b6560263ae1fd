use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Failed to list {path:?}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path {path:?} does not exist")]
    NotFound { path: PathBuf },

    #[error("Failed to load exclude list from {path:?}: {source}")]
    ExcludeLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save exclude list to {path:?}: {source}")]
    ExcludeSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the user configuration directory")]
    NoConfigDir,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Failed to serialize tree: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
