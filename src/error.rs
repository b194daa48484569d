//! Error types for the NHL statistics exporter

use thiserror::Error;


pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Error, Debug)]
pub enum ExportError {
    /// Connection failures and non-success HTTP statuses.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response from `{path}`: {source}")]
    MalformedResponse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response from `{path}` is missing field `{field}`")]
    MissingField { path: String, field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid base URL: {url}")]
    InvalidBaseUrl { url: String },
}

impl ExportError {
    pub(crate) fn malformed(path: &str, source: serde_json::Error) -> Self {
        ExportError::MalformedResponse {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn missing(path: &str, field: &'static str) -> Self {
        ExportError::MissingField {
            path: path.to_string(),
            field,
        }
    }
}
