//! The unified client error.

use rustddb_model::{ClientError, ParseError, ServiceError, ServiceErrorCode};

use crate::transport::TransportError;

/// Result alias for client operations.
pub type DdbResult<T> = Result<T, Error>;

/// Everything a client operation can fail with.
///
/// The four variants keep the failure origins distinct: `Client` errors
/// are caught before any request is sent, `Transport` errors mean no
/// service response arrived, `Service` errors are failures the service
/// itself reported, and `Parse` errors mean a 2xx response carried a
/// payload the client could not decode.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input caught locally, before any request was sent.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The transport failed before a service response arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service rejected the request.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A successful response carried an undecodable payload.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// The symbolic service error code, if the service reported one.
    #[must_use]
    pub fn service_code(&self) -> Option<&ServiceErrorCode> {
        match self {
            Self::Service(e) => Some(&e.code),
            _ => None,
        }
    }

    /// Whether this is a throttling rejection the caller may retry.
    #[must_use]
    pub fn is_throttling(&self) -> bool {
        matches!(self, Self::Service(e) if e.is_throttling())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_classify_throttling() {
        let err = Error::from(ServiceError::new(
            ServiceErrorCode::ProvisionedThroughputExceededException,
            "slow down".to_owned(),
        ));
        assert!(err.is_throttling());
        assert_eq!(
            err.service_code(),
            Some(&ServiceErrorCode::ProvisionedThroughputExceededException),
        );
    }

    #[test]
    fn test_should_not_report_code_for_transport_failures() {
        let err = Error::from(TransportError::Timeout("deadline exceeded".to_owned()));
        assert!(!err.is_throttling());
        assert!(err.service_code().is_none());
    }
}
