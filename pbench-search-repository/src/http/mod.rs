//! HTTP implementation of the datastore transport.
//!
//! This module provides a concrete implementation of `Transport` on top of
//! reqwest.

mod transport;

pub use transport::HttpTransport;
