//! # pbench Search Shared
//!
//! Plain data types shared by the pbench run search crates: the datastore
//! configuration supplied by callers and the request descriptors handed to
//! a transport.

mod datastore;
mod request;

pub use datastore::{DatastoreConfig, InvalidDatastoreConfig};
pub use request::{
    HttpMethod, IndexMappingRequest, QueryClause, QueryPayload, QueryString, RequestOptions,
    SearchRequest, RUN_DOCUMENT_TYPE, SEARCH_RESULT_SIZE,
};
