//! Asynchronous client for a DynamoDB-style key-value store.
//!
//! The crate is split along one seam: everything that touches the network
//! lives behind the [`Transport`] trait, and everything above it — request
//! builders, response parsers, the [`Client`] orchestration — is pure and
//! deterministic. That makes the whole client testable against scripted
//! responses, with no live service anywhere in the test suite.
//!
//! Typical use: construct a [`Client`] over a transport, create a table,
//! poll [`Client::table_state`] until it is active, then put, get, and
//! query items. The client never retries and never sleeps; throttling and
//! backoff policy belong to the caller.
// "DynamoDB" appears in doc comments throughout this crate.
#![allow(clippy::doc_markdown)]

pub mod client;
pub mod error;
pub mod parse;
pub mod query;
pub mod region;
pub mod request;
pub mod transport;

pub use client::{Client, TableState};
pub use error::{DdbResult, Error};
pub use query::Query;
pub use region::Region;
pub use transport::{Transport, TransportError, WireRequest, WireResponse, CONTENT_TYPE};
