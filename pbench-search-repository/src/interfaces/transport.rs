//! Transport trait definition.
//!
//! This module defines the abstract interface the search client uses to
//! perform the actual HTTP exchange.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SearchError;
use pbench_search_shared::RequestOptions;

/// Abstract interface for sending a request to the datastore.
///
/// Implementations own everything about the exchange: connection handling,
/// timeouts, authentication, serializing `options.body` to the wire and
/// decoding the response. The search client neither wraps nor retries what
/// an implementation returns.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `options.method` to `endpoint` and return the decoded JSON body.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Absolute URL of the request
    /// * `options` - Method and optional JSON body
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The response body
    /// * `Err(SearchError)` - If the exchange fails or the status is not a success
    async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, SearchError>;
}
