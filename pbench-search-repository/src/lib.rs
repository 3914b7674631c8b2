//! # pbench Search Repository
//!
//! This crate builds the requests the dashboard sends to the run datastore
//! (index mapping lookups and free-text run searches) and hands them to an
//! injected [`Transport`]. A reqwest-backed [`HttpTransport`] is provided
//! for real clusters; tests inject their own.

pub mod client;
pub mod config;
pub mod errors;
pub mod http;
pub mod interfaces;
pub mod queries;
pub mod types;

pub use client::SearchClient;
pub use config::{load_datastore_config, TransportConfig};
pub use errors::SearchError;
pub use http::HttpTransport;
pub use interfaces::Transport;
pub use types::{IndexMappingParams, SearchParams};
