//! Command execution.

use serde_json::{json, Value};
use tracing::info;

use crate::cli::Command;
use crate::config::Dependencies;
use crate::CliError;
use pbench_search_repository::queries::{build_mapping_request, build_search_request};
use pbench_search_repository::{IndexMappingParams, SearchParams};
use pbench_search_shared::DatastoreConfig;

/// Run `command` against the datastore and return the response body.
pub async fn execute(deps: &Dependencies, command: Command) -> Result<Value, CliError> {
    match command {
        Command::Mappings { indices } => {
            let params = IndexMappingParams::new(deps.datastore.clone(), indices);
            Ok(deps.client.query_index_mapping(&params).await?)
        }
        Command::Search {
            indices,
            fields,
            query,
        } => {
            let params = SearchParams::new(deps.datastore.clone(), indices, fields, query);
            let response = deps.client.search_query(&params).await?;

            if let Some(total) = response.pointer("/hits/total") {
                info!(total = %total, "Search finished");
            }
            Ok(response)
        }
    }
}

/// Describe the request `command` would send, without sending it.
pub fn describe(datastore: &DatastoreConfig, command: &Command) -> Result<Value, CliError> {
    let described = match command {
        Command::Mappings { indices } => {
            let request = build_mapping_request(datastore, indices);
            json!({ "endpoint": request.endpoint, "options": request.options() })
        }
        Command::Search {
            indices,
            fields,
            query,
        } => {
            let request = build_search_request(datastore, indices, fields, query);
            json!({ "endpoint": request.endpoint, "options": request.options()? })
        }
    };
    Ok(described)
}
