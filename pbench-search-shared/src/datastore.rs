//! Datastore configuration for the backend search cluster.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Connection and naming-convention settings for the search cluster.
///
/// Run indices are named `{prefix}{run_index}{suffix}`, where the suffix is
/// chosen by the caller (usually a month such as `2019-08`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatastoreConfig {
    /// Base URL of the cluster, e.g. `http://localhost:9200`.
    pub elasticsearch: String,
    /// Naming prefix shared by every index of this installation.
    pub prefix: String,
    /// Name segment identifying run indices.
    pub run_index: String,
}

/// A datastore config field was empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("datastore config field `{field}` must not be empty")]
pub struct InvalidDatastoreConfig {
    pub field: &'static str,
}

impl DatastoreConfig {
    pub fn new(
        elasticsearch: impl Into<String>,
        prefix: impl Into<String>,
        run_index: impl Into<String>,
    ) -> Self {
        Self {
            elasticsearch: elasticsearch.into(),
            prefix: prefix.into(),
            run_index: run_index.into(),
        }
    }

    /// Full name of the run index with the given suffix.
    pub fn run_index_name(&self, suffix: &str) -> String {
        format!("{}{}{}", self.prefix, self.run_index, suffix)
    }

    /// Check that every field is non-empty.
    ///
    /// The request builders never call this; it is meant for the places
    /// where configuration enters the program.
    pub fn validate(&self) -> Result<(), InvalidDatastoreConfig> {
        let fields = [
            ("elasticsearch", &self.elasticsearch),
            ("prefix", &self.prefix),
            ("run_index", &self.run_index),
        ];
        match fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(InvalidDatastoreConfig { field }),
            None => Ok(()),
        }
    }
}
