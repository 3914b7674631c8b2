//! Search client implementation.
//!
//! This module provides the client the dashboard and CLI use to look up run
//! index mappings and search runs. Requests are built by [`crate::queries`]
//! and sent through whichever transport the client was created with.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::SearchError;
use crate::interfaces::Transport;
use crate::queries::{build_mapping_request, build_search_request};
use crate::types::{IndexMappingParams, SearchParams};

/// The main client for querying the run datastore.
pub struct SearchClient {
    transport: Box<dyn Transport>,
}

impl SearchClient {
    /// Create a new SearchClient sending requests through `transport`.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch the field mappings of a run index.
    /// Input: IndexMappingParams (datastore config, index suffixes; only the first is used)
    /// Output: Result<Value, SearchError> (the transport's response, unchanged)
    #[instrument(skip(self, params), fields(index = ?params.indices.first()))]
    pub async fn query_index_mapping(
        &self,
        params: &IndexMappingParams,
    ) -> Result<Value, SearchError> {
        let request = build_mapping_request(&params.datastore_config, &params.indices);

        debug!(endpoint = %request.endpoint, "Querying index mapping");

        self.transport
            .request(&request.endpoint, request.options())
            .await
    }

    /// Search runs for `query` across the selected indices and fields.
    /// Input: SearchParams (datastore config, index suffixes, fields, free-text query)
    /// Output: Result<Value, SearchError> (the transport's response, unchanged)
    #[instrument(
        skip(self, params),
        fields(
            index_count = params.selected_indices.len(),
            field_count = params.selected_fields.len()
        )
    )]
    pub async fn search_query(&self, params: &SearchParams) -> Result<Value, SearchError> {
        let request = build_search_request(
            &params.datastore_config,
            &params.selected_indices,
            &params.selected_fields,
            &params.query,
        );
        let options = request.options()?;

        debug!(
            endpoint = %request.endpoint,
            query = %request.body.query_text(),
            "Searching runs"
        );

        self.transport.request(&request.endpoint, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pbench_search_shared::{DatastoreConfig, HttpMethod, RequestOptions};
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Mock transport for testing
    struct MockTransport {
        requests: Recorded,
        response: Result<Value, SearchError>,
    }

    impl MockTransport {
        fn new(response: Result<Value, SearchError>) -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                response,
            }
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn request(
            &self,
            endpoint: &str,
            options: RequestOptions,
        ) -> Result<Value, SearchError> {
            self.requests
                .lock()
                .await
                .push((endpoint.to_string(), options));
            self.response.clone()
        }
    }

    fn config() -> DatastoreConfig {
        DatastoreConfig::new("http://h", "p-", "run-")
    }

    type Recorded = Arc<Mutex<Vec<(String, RequestOptions)>>>;

    fn client_with(response: Result<Value, SearchError>) -> (SearchClient, Recorded) {
        let transport = MockTransport::new(response);
        let requests = transport.requests.clone();
        (SearchClient::new(Box::new(transport)), requests)
    }

    #[tokio::test]
    async fn test_query_index_mapping_sends_get() {
        let (client, requests) = client_with(Ok(json!({"p-run-a": {"mappings": {}}})));
        let params = IndexMappingParams::new(config(), vec!["a".to_string(), "b".to_string()]);

        let response = client.query_index_mapping(&params).await.unwrap();
        assert_eq!(response, json!({"p-run-a": {"mappings": {}}}));

        let requests = requests.lock().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "http://h/p-run-a/_mappings");
        assert_eq!(requests[0].1.method, HttpMethod::Get);
        assert!(requests[0].1.body.is_none());
    }

    #[tokio::test]
    async fn test_search_query_sends_post_with_payload() {
        let (client, requests) = client_with(Ok(json!({"hits": {"total": 0, "hits": []}})));
        let params = SearchParams::new(
            config(),
            vec!["a".to_string(), "b".to_string()],
            vec!["a".to_string(), "b".to_string()],
            "x",
        );

        client.search_query(&params).await.unwrap();

        let requests = requests.lock().await;
        assert_eq!(requests[0].0, "http://h/p-run-a,p-run-b,/_search");
        assert_eq!(requests[0].1.method, HttpMethod::Post);
        assert_eq!(
            requests[0].1.body,
            Some(json!({
                "query": {
                    "query_string": {
                        "analyze_wildcard": true,
                        "query": "_type:pbench-run AND (a:*x* OR b:*x*)"
                    }
                },
                "size": 1000
            }))
        );
    }

    #[tokio::test]
    async fn test_transport_errors_pass_through() {
        let error = SearchError::http_status(400, "parse_exception");
        let (client, _) = client_with(Err(error.clone()));
        let params = SearchParams::new(config(), vec![], vec![], "x");

        let result = client.search_query(&params).await;
        assert_eq!(result, Err(error));

        let error = SearchError::connection("connection refused");
        let (client, _) = client_with(Err(error.clone()));
        let params = IndexMappingParams::new(config(), vec![]);

        assert_eq!(client.query_index_mapping(&params).await, Err(error));
    }

    #[tokio::test]
    async fn test_malformed_inputs_are_still_sent() {
        let (client, requests) = client_with(Ok(json!({})));
        let params = SearchParams::new(config(), vec![], vec![], "x");

        client.search_query(&params).await.unwrap();

        let requests = requests.lock().await;
        assert_eq!(requests[0].0, "http://h//_search");
        let body = requests[0].1.body.as_ref().unwrap();
        assert_eq!(body["query"]["query_string"]["query"], "_type:pbench-run AND (");
    }

    #[tokio::test]
    async fn test_repeated_calls_send_identical_requests() {
        let (client, requests) = client_with(Ok(json!({})));
        let params = SearchParams::new(
            config(),
            vec!["a".to_string()],
            vec!["name".to_string()],
            "foo",
        );

        client.search_query(&params).await.unwrap();
        client.search_query(&params).await.unwrap();

        let requests = requests.lock().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }
}
