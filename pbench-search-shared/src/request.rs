//! Request descriptors handed to a transport.
//!
//! Each descriptor carries a fully formed endpoint, the HTTP method and, for
//! searches, the JSON body. They are built fresh per call and never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Document type every run document is stored under.
pub const RUN_DOCUMENT_TYPE: &str = "pbench-run";

/// Maximum number of hits a search returns.
pub const SEARCH_RESULT_SIZE: u32 = 1000;

/// HTTP method of a request descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options accompanying an endpoint when calling a transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestOptions {
    pub method: HttpMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

/// GET request for the field mappings of a run index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexMappingRequest {
    pub endpoint: String,
    pub method: HttpMethod,
}

impl IndexMappingRequest {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: HttpMethod::Get,
        }
    }

    pub fn options(&self) -> RequestOptions {
        RequestOptions {
            method: self.method,
            body: None,
        }
    }
}

/// POST request running a free-text search over run indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub endpoint: String,
    pub method: HttpMethod,
    pub body: QueryPayload,
}

impl SearchRequest {
    pub fn new(endpoint: impl Into<String>, body: QueryPayload) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: HttpMethod::Post,
            body,
        }
    }

    /// Convert into transport options with the payload as a JSON body.
    pub fn options(&self) -> Result<RequestOptions, serde_json::Error> {
        Ok(RequestOptions {
            method: self.method,
            body: Some(serde_json::to_value(&self.body)?),
        })
    }
}

/// Search body: `{ query: { query_string: { analyze_wildcard, query } }, size }`.
///
/// Field declaration order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPayload {
    pub query: QueryClause,
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryClause {
    pub query_string: QueryString,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryString {
    pub analyze_wildcard: bool,
    pub query: String,
}

impl QueryPayload {
    /// Wrap a query string with wildcard analysis on and the fixed result cap.
    pub fn query_string(query: impl Into<String>) -> Self {
        Self {
            query: QueryClause {
                query_string: QueryString {
                    analyze_wildcard: true,
                    query: query.into(),
                },
            },
            size: SEARCH_RESULT_SIZE,
        }
    }

    /// The inner boolean query string.
    pub fn query_text(&self) -> &str {
        &self.query.query_string.query
    }
}
