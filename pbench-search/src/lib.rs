//! # pbench Search
//!
//! Command line client for the pbench run datastore.
//!
//! This crate wires configuration, the HTTP transport and the search client
//! together and exposes the `mappings` and `search` commands.

pub mod cli;
pub mod commands;
pub mod config;

pub use config::{Dependencies, Overrides, Settings};

use thiserror::Error;

/// Errors that can occur while configuring or running a command.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] pbench_search_repository::SearchError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
