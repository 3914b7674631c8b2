//! Interface definitions for the datastore transport.
//!
//! This module defines the abstract `Transport` trait so the request
//! builders can be exercised without network access.

mod transport;

pub use transport::Transport;
