//! Settings resolved from the environment, an optional datastore config
//! file, and command line overrides.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use crate::CliError;
use pbench_search_repository::{config::DEFAULT_TIMEOUT_SECS, load_datastore_config};
use pbench_search_shared::DatastoreConfig;

/// Default Elasticsearch URL.
const DEFAULT_ELASTICSEARCH_URL: &str = "http://localhost:9200";

/// Default index naming prefix.
const DEFAULT_PREFIX: &str = "pbench.";

/// Default run index name segment.
const DEFAULT_RUN_INDEX: &str = "run-data.";

/// Values given on the command line. Each one wins over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub elasticsearch: Option<String>,
    pub prefix: Option<String>,
    pub run_index: Option<String>,
    pub config_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub datastore: DatastoreConfig,
    pub timeout: Duration,
}

impl Settings {
    /// Resolve settings from environment variables and `overrides`.
    ///
    /// # Environment Variables
    ///
    /// - `DATASTORE_CONFIG`: path to a JSON datastore config; when set, the
    ///   three variables below are ignored
    /// - `ELASTICSEARCH_URL`: cluster URL (default: http://localhost:9200)
    /// - `ES_PREFIX`: index naming prefix (default: pbench.)
    /// - `ES_RUN_INDEX`: run index segment (default: run-data.)
    /// - `SEARCH_TIMEOUT_SECS`: request timeout (default: 30)
    pub fn resolve(overrides: Overrides) -> Result<Self, CliError> {
        Self::resolve_with(|key| env::var(key).ok(), overrides)
    }

    /// Resolve settings reading variables through `lookup`.
    pub fn resolve_with<F>(lookup: F, overrides: Overrides) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_file = overrides
            .config_file
            .or_else(|| lookup("DATASTORE_CONFIG").map(PathBuf::from));

        let mut datastore = match config_file {
            Some(path) => load_datastore_config(&path)?,
            None => DatastoreConfig::new(
                lookup("ELASTICSEARCH_URL")
                    .unwrap_or_else(|| DEFAULT_ELASTICSEARCH_URL.to_string()),
                lookup("ES_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
                lookup("ES_RUN_INDEX").unwrap_or_else(|| DEFAULT_RUN_INDEX.to_string()),
            ),
        };

        if let Some(elasticsearch) = overrides.elasticsearch {
            datastore.elasticsearch = elasticsearch;
        }
        if let Some(prefix) = overrides.prefix {
            datastore.prefix = prefix;
        }
        if let Some(run_index) = overrides.run_index {
            datastore.run_index = run_index;
        }

        datastore
            .validate()
            .map_err(|e| CliError::config(e.to_string()))?;

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => secs,
            None => match lookup("SEARCH_TIMEOUT_SECS") {
                Some(value) => value.parse::<u64>().map_err(|e| {
                    CliError::config(format!("Invalid SEARCH_TIMEOUT_SECS {:?}: {}", value, e))
                })?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };

        info!(
            elasticsearch = %datastore.elasticsearch,
            prefix = %datastore.prefix,
            run_index = %datastore.run_index,
            timeout_secs,
            "Resolved settings"
        );

        Ok(Self {
            datastore,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve_with(lookup(&[]), Overrides::default()).unwrap();

        assert_eq!(
            settings.datastore,
            DatastoreConfig::new("http://localhost:9200", "pbench.", "run-data.")
        );
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_environment_values() {
        let settings = Settings::resolve_with(
            lookup(&[
                ("ELASTICSEARCH_URL", "http://es:9200"),
                ("ES_PREFIX", "dsa-pbench."),
                ("ES_RUN_INDEX", "v4.run."),
                ("SEARCH_TIMEOUT_SECS", "5"),
            ]),
            Overrides::default(),
        )
        .unwrap();

        assert_eq!(
            settings.datastore,
            DatastoreConfig::new("http://es:9200", "dsa-pbench.", "v4.run.")
        );
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = Overrides {
            prefix: Some("p-".to_string()),
            timeout_secs: Some(2),
            ..Overrides::default()
        };
        let settings = Settings::resolve_with(
            lookup(&[("ES_PREFIX", "env-"), ("SEARCH_TIMEOUT_SECS", "9")]),
            overrides,
        )
        .unwrap();

        assert_eq!(settings.datastore.prefix, "p-");
        assert_eq!(settings.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"elasticsearch": "http://file:9200", "prefix": "f-", "run_index": "run-"}"#,
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let settings = Settings::resolve_with(
            lookup(&[("DATASTORE_CONFIG", path.as_str()), ("ES_PREFIX", "ignored-")]),
            Overrides::default(),
        )
        .unwrap();

        assert_eq!(
            settings.datastore,
            DatastoreConfig::new("http://file:9200", "f-", "run-")
        );
    }

    #[test]
    fn test_empty_value_rejected() {
        let overrides = Overrides {
            run_index: Some(String::new()),
            ..Overrides::default()
        };

        assert!(matches!(
            Settings::resolve_with(lookup(&[]), overrides),
            Err(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_bad_timeout_rejected() {
        assert!(matches!(
            Settings::resolve_with(
                lookup(&[("SEARCH_TIMEOUT_SECS", "soon")]),
                Overrides::default()
            ),
            Err(CliError::ConfigError(_))
        ));
    }
}
