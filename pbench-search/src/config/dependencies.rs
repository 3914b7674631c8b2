//! Dependency initialization and wiring for the search CLI.

use tracing::info;

use crate::config::Settings;
use crate::CliError;
use pbench_search_repository::{HttpTransport, SearchClient, TransportConfig};
use pbench_search_shared::DatastoreConfig;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Datastore the commands run against.
    pub datastore: DatastoreConfig,
    /// Client sending requests over HTTP.
    pub client: SearchClient,
}

impl Dependencies {
    /// Build the HTTP transport and search client from resolved settings.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(CliError)` - If the transport cannot be created
    pub fn new(settings: &Settings) -> Result<Self, CliError> {
        let transport = HttpTransport::new(TransportConfig::with_timeout(settings.timeout))
            .map_err(|e| CliError::config(format!("Failed to create HTTP transport: {}", e)))?;

        info!(elasticsearch = %settings.datastore.elasticsearch, "Search client ready");

        Ok(Self {
            datastore: settings.datastore.clone(),
            client: SearchClient::new(Box::new(transport)),
        })
    }
}
