//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(name = "pbench-search")]
#[command(about = "Look up run index mappings and search pbench runs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Elasticsearch URL (overrides ELASTICSEARCH_URL)
    #[arg(long, global = true)]
    pub elasticsearch: Option<String>,

    /// Index naming prefix (overrides ES_PREFIX)
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Run index name segment (overrides ES_RUN_INDEX)
    #[arg(long, global = true)]
    pub run_index: Option<String>,

    /// JSON datastore config file (overrides DATASTORE_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (overrides SEARCH_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Print the request instead of sending it
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Fetch the field mappings of a run index
    Mappings {
        /// Run index suffix; only the first one is used
        #[arg(long = "index", required = true)]
        indices: Vec<String>,
    },
    /// Search runs for text across indices and fields
    Search {
        /// Run index suffix to search, repeatable
        #[arg(long = "index")]
        indices: Vec<String>,

        /// Field to match the text against, repeatable
        #[arg(long = "field", required = true)]
        fields: Vec<String>,

        /// Text to look for anywhere in the field values
        query: String,
    },
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            elasticsearch: self.elasticsearch.clone(),
            prefix: self.prefix.clone(),
            run_index: self.run_index.clone(),
            config_file: self.config.clone(),
            timeout_secs: self.timeout,
        }
    }
}
