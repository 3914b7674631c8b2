//! Request builders for the run datastore.
//!
//! Both builders are pure string assembly. They never validate their
//! inputs: empty index or field lists produce malformed requests which the
//! backend then rejects, matching what existing dashboards send on the wire.

use pbench_search_shared::{
    DatastoreConfig, IndexMappingRequest, QueryPayload, SearchRequest, RUN_DOCUMENT_TYPE,
};

/// Build the GET request for the mappings of a run index.
///
/// Endpoint: `{elasticsearch}/{prefix}{run_index}{indices[0]}/_mappings`.
/// Only the first index is consulted; an empty list leaves the suffix empty.
pub fn build_mapping_request<S: AsRef<str>>(
    config: &DatastoreConfig,
    indices: &[S],
) -> IndexMappingRequest {
    let suffix: &str = indices.first().map(|index| index.as_ref()).unwrap_or("");

    IndexMappingRequest::new(format!(
        "{}/{}/_mappings",
        config.elasticsearch,
        config.run_index_name(suffix)
    ))
}

/// Build the POST request searching `fields` of the given run indices for
/// `query` anywhere in the value.
///
/// Endpoint: `{elasticsearch}/{index_segment}/_search`, see
/// [`build_index_segment`] for the segment format.
pub fn build_search_request<S: AsRef<str>, F: AsRef<str>>(
    config: &DatastoreConfig,
    indices: &[S],
    fields: &[F],
    query: &str,
) -> SearchRequest {
    let endpoint = format!(
        "{}/{}/_search",
        config.elasticsearch,
        build_index_segment(config, indices)
    );

    SearchRequest::new(
        endpoint,
        QueryPayload::query_string(build_query_string(fields, query)),
    )
}

/// Every full index name followed by a comma, trailing comma included:
/// `p-run-a,p-run-b,`.
pub fn build_index_segment<S: AsRef<str>>(config: &DatastoreConfig, indices: &[S]) -> String {
    indices.iter().fold(String::new(), |mut segment, index| {
        segment.push_str(&config.run_index_name(index.as_ref()));
        segment.push(',');
        segment
    })
}

/// `_type:pbench-run AND (f1:*q* OR f2:*q*)`.
///
/// With no fields the expression is left unclosed.
pub fn build_query_string<F: AsRef<str>>(fields: &[F], query: &str) -> String {
    let mut expression = format!("_type:{} AND (", RUN_DOCUMENT_TYPE);

    for (i, field) in fields.iter().enumerate() {
        let field = field.as_ref();
        if i < fields.len() - 1 {
            expression.push_str(&format!("{}:*{}* OR ", field, query));
        } else {
            expression.push_str(&format!("{}:*{}*)", field, query));
        }
    }

    expression
}
