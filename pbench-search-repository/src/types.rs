//! Parameter types for the search client operations.

use pbench_search_shared::DatastoreConfig;

/// Parameters for an index mapping lookup.
///
/// Only the first entry of `indices` is used; the rest are ignored.
#[derive(Debug, Clone)]
pub struct IndexMappingParams {
    /// Datastore the run indices live in.
    pub datastore_config: DatastoreConfig,
    /// Run index suffixes, e.g. `["2019-08"]`.
    pub indices: Vec<String>,
}

/// Parameters for a free-text run search.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Datastore the run indices live in.
    pub datastore_config: DatastoreConfig,
    /// Run index suffixes to search across.
    pub selected_indices: Vec<String>,
    /// Document fields the query text is matched against.
    pub selected_fields: Vec<String>,
    /// Free-text query, inserted between wildcards as-is.
    pub query: String,
}

impl IndexMappingParams {
    pub fn new(datastore_config: DatastoreConfig, indices: Vec<String>) -> Self {
        Self {
            datastore_config,
            indices,
        }
    }
}

impl SearchParams {
    pub fn new(
        datastore_config: DatastoreConfig,
        selected_indices: Vec<String>,
        selected_fields: Vec<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            datastore_config,
            selected_indices,
            selected_fields,
            query: query.into(),
        }
    }
}
