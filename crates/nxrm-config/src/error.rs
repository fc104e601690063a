//! Error types for nxrm-config

use std::path::PathBuf;

use crate::validation::ValidationReport;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} config for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Invalid Nexus Repository Manager version: {value}")]
    InvalidVersion { value: String },

    #[error("Unknown configuration kind: {value}")]
    UnknownKind { value: String },

    #[error("Server {id} does not declare a Nexus Repository Manager version")]
    VersionUnspecified { id: String },

    #[error("Invalid server URL for {id}: {message}")]
    InvalidServerUrl { id: String, message: String },

    #[error("Duplicate server id: {id}")]
    DuplicateId { id: String },

    #[error("Duplicate internal id: {internal_id}")]
    DuplicateInternalId { internal_id: String },

    #[error("Server not found: {id}")]
    ServerNotFound { id: String },

    #[error("Configuration is invalid:\n{0}")]
    Validation(ValidationReport),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
