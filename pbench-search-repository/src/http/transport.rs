//! reqwest transport implementation.
//!
//! This module provides the concrete implementation of `Transport` used
//! against a real datastore.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info, instrument};
use url::Url;

use crate::config::TransportConfig;
use crate::errors::SearchError;
use crate::interfaces::Transport;
use pbench_search_shared::{HttpMethod, RequestOptions};

/// HTTP transport backed by a single reqwest client.
///
/// # Example
///
/// ```ignore
/// let transport = HttpTransport::new(TransportConfig::default())?;
/// let client = SearchClient::new(Box::new(transport));
/// let mappings = client.query_index_mapping(&params).await?;
/// ```
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a new transport.
    ///
    /// # Returns
    ///
    /// * `Ok(HttpTransport)` - A new transport instance
    /// * `Err(SearchError)` - If the underlying client cannot be built
    pub fn new(config: TransportConfig) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if config.disable_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| SearchError::connection(e.to_string()))?;

        info!(
            timeout_ms = config.timeout.as_millis() as u64,
            disable_proxy = config.disable_proxy,
            "Created HTTP transport"
        );

        Ok(Self { client })
    }

    fn method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(
        skip(self, endpoint, options),
        fields(endpoint = %endpoint, method = %options.method)
    )]
    async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, SearchError> {
        let url = Url::parse(endpoint)
            .map_err(|e| SearchError::invalid_endpoint(format!("{}: {}", endpoint, e)))?;

        let mut request = self.client.request(Self::method(options.method), url);
        if let Some(ref body) = options.body {
            request = request.json(body);
        }

        debug!("Sending request");

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "Request failed");
            SearchError::connection(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SearchError::connection(e.to_string()))?;

        if !status.is_success() {
            error!(status = %status, body = %text, "Request returned an error status");
            return Err(SearchError::http_status(status.as_u16(), text));
        }

        serde_json::from_str(&text).map_err(|e| SearchError::parse(e.to_string()))
    }
}
