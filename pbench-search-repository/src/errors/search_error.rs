//! Search error types.
//!
//! This module defines the errors surfaced by transports and configuration
//! loading. Request construction itself never fails.

use thiserror::Error;

/// Errors that can occur while talking to the run datastore.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The request never reached the server (DNS, connect, timeout).
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The server answered with a non-success status.
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Failed to parse the response from the search engine.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize a request body.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The endpoint is not a valid URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Datastore or transport configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an HTTP status error.
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create an invalid endpoint error.
    pub fn invalid_endpoint(msg: impl Into<String>) -> Self {
        Self::InvalidEndpoint(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        Self::serialization(e.to_string())
    }
}
