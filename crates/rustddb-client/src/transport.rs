//! The transport boundary.
//!
//! The client core builds requests and parses responses; everything that
//! touches the network — connection management, request signing,
//! region-to-endpoint resolution — lives behind the [`Transport`] trait.
//! A transport receives a fully described request and returns the raw
//! status and payload, or a [`TransportError`].

use bytes::Bytes;
use rustddb_model::Operation;

use crate::region::Region;

/// Content type for request and response bodies.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// A fully described wire request, ready to be signed and executed.
#[derive(Debug, Clone)]
pub struct WireRequest {
    /// The region the request is scoped to.
    pub region: Region,
    /// The operation being invoked.
    pub operation: Operation,
    /// The JSON request payload.
    pub body: Bytes,
}

impl WireRequest {
    /// The `X-Amz-Target` header value for this request.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.operation.target()
    }
}

/// A raw response from the transport: status code plus payload bytes.
#[derive(Debug, Clone)]
pub struct WireResponse {
    /// The HTTP status code.
    pub status: http::StatusCode,
    /// The raw response payload.
    pub body: Bytes,
}

impl WireResponse {
    /// Create a response from a status and payload.
    pub fn new(status: http::StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A failure inside the transport, before any service response arrived.
///
/// The client core never retries these; callers inspect and retry as they
/// see fit.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The connection could not be established or was dropped.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request did not complete within the transport's deadline.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Any other transport-level failure.
    #[error("transport failure: {0}")]
    Other(String),
}

/// Executes signed wire requests against the remote service.
///
/// Implementations own the HTTP stack, signing, and endpoint resolution.
/// `execute` must be non-blocking at the call site; dropping the returned
/// future does not cancel the remote operation.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request and return the raw response.
    async fn execute(&self, request: WireRequest) -> Result<WireResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_expose_operation_target() {
        let request = WireRequest {
            region: Region::EuWest1,
            operation: Operation::DescribeTable,
            body: Bytes::from_static(b"{}"),
        };
        assert_eq!(request.target(), "DynamoDB_20111205.DescribeTable");
        assert_eq!(request.region, Region::EuWest1);
    }
}
