//! Configuration types for the transport and the datastore.

use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::errors::SearchError;
use pbench_search_shared::DatastoreConfig;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HttpTransport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Timeout applied to a whole request, connect through body.
    pub timeout: Duration,
    /// Ignore proxy settings from the environment.
    pub disable_proxy: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            disable_proxy: false,
        }
    }
}

impl TransportConfig {
    /// Create a config with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Ignore `HTTP_PROXY` and friends.
    pub fn without_proxy(mut self) -> Self {
        self.disable_proxy = true;
        self
    }
}

/// Load a datastore config from a JSON file and check it is complete.
///
/// The file may carry other dashboard settings; only `elasticsearch`,
/// `prefix` and `run_index` are read.
pub fn load_datastore_config(path: impl AsRef<Path>) -> Result<DatastoreConfig, SearchError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        SearchError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let config: DatastoreConfig = serde_json::from_str(&contents).map_err(|e| {
        SearchError::config(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    config
        .validate()
        .map_err(|e| SearchError::config(format!("{}: {}", path.display(), e)))?;

    debug!(
        path = %path.display(),
        elasticsearch = %config.elasticsearch,
        "Loaded datastore config"
    );

    Ok(config)
}
