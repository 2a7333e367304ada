//! Error model for the client.
//!
//! Three distinct failure families live here because they are all part of
//! the wire/data contract:
//!
//! - [`ClientError`]: contract violations detected before any network call.
//! - [`ServiceError`]: a well-formed error response from the service,
//!   carrying a symbolic code parsed from the JSON `__type` field.
//! - [`ParseError`]: a response payload that cannot be decoded against the
//!   expected shape. Never coerced to a default value.

use std::fmt;

/// A contract violation detected locally, before any request is built.
///
/// These are the only failures surfaced synchronously by constructors and
/// accessors; everything else travels through a `Result` from an async
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// An accessor was invoked on the wrong [`crate::AttributeValue`] variant.
    #[error("type mismatch: expected {expected} attribute, found {actual}")]
    TypeMismatch {
        /// The type descriptor the accessor expected (`S`, `N`, ...).
        expected: &'static str,
        /// The type descriptor of the actual variant.
        actual: &'static str,
    },

    /// A primary key schema that the service would never accept.
    #[error("invalid key schema: {0}")]
    InvalidSchema(String),
}

/// Well-known service error codes.
///
/// Codes arrive as the fragment of the `__type` field after `#`, e.g.
/// `com.amazonaws.dynamodb.v20111205#ResourceNotFoundException`.
/// Unrecognized codes are preserved verbatim in [`Unknown`] rather than
/// being dropped.
///
/// [`Unknown`]: ServiceErrorCode::Unknown
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ServiceErrorCode {
    /// Table (or other resource) not found.
    ResourceNotFoundException,
    /// Resource is in a state that forbids the operation (e.g. deleting a
    /// table that is still `CREATING`).
    ResourceInUseException,
    /// A conditional write's condition evaluated to false.
    ConditionalCheckFailedException,
    /// Provisioned read/write capacity exceeded; retryable by the caller.
    ProvisionedThroughputExceededException,
    /// Request-rate throttling; retryable by the caller.
    ThrottlingException,
    /// Malformed or invalid request parameters.
    ValidationException,
    /// The caller is not authorized for the operation.
    AccessDeniedException,
    /// Transient server-side failure.
    InternalServerError,
    /// The service is temporarily unavailable.
    ServiceUnavailable,
    /// Any code this client does not recognize, carried verbatim.
    Unknown(String),
}

impl ServiceErrorCode {
    /// Map a raw wire code onto the closed code set.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "ResourceNotFoundException" => Self::ResourceNotFoundException,
            "ResourceInUseException" => Self::ResourceInUseException,
            "ConditionalCheckFailedException" => Self::ConditionalCheckFailedException,
            "ProvisionedThroughputExceededException" => {
                Self::ProvisionedThroughputExceededException
            }
            "ThrottlingException" => Self::ThrottlingException,
            "ValidationException" => Self::ValidationException,
            "AccessDeniedException" => Self::AccessDeniedException,
            "InternalServerError" | "InternalFailure" => Self::InternalServerError,
            "ServiceUnavailable" | "ServiceUnavailableException" => Self::ServiceUnavailable,
            _ => Self::Unknown(code.to_owned()),
        }
    }

    /// Returns the wire code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::ResourceInUseException => "ResourceInUseException",
            Self::ConditionalCheckFailedException => "ConditionalCheckFailedException",
            Self::ProvisionedThroughputExceededException => {
                "ProvisionedThroughputExceededException"
            }
            Self::ThrottlingException => "ThrottlingException",
            Self::ValidationException => "ValidationException",
            Self::AccessDeniedException => "AccessDeniedException",
            Self::InternalServerError => "InternalServerError",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::Unknown(code) => code.as_str(),
        }
    }

    /// Returns `true` for codes that indicate transient throttling.
    ///
    /// The client never retries on its own; this is the hook callers use to
    /// build their own backoff policy.
    #[must_use]
    pub fn is_throttling(&self) -> bool {
        matches!(
            self,
            Self::ProvisionedThroughputExceededException | Self::ThrottlingException
        )
    }
}

impl fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A well-formed error response from the remote service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("service error {code}: {message}")]
pub struct ServiceError {
    /// The symbolic error code.
    pub code: ServiceErrorCode,
    /// The human-readable message from the response body.
    pub message: String,
}

impl ServiceError {
    /// Create a new `ServiceError`.
    #[must_use]
    pub fn new(code: ServiceErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns `true` if the error is transient throttling.
    #[must_use]
    pub fn is_throttling(&self) -> bool {
        self.code.is_throttling()
    }
}

/// A response payload that does not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An attribute value object with zero or more than one type tag, an
    /// unrecognized tag, or a value of the wrong JSON shape.
    #[error("malformed attribute value: {0}")]
    MalformedAttribute(String),

    /// A table status string outside the closed status set.
    #[error("unrecognized table status: {0:?}")]
    UnknownStatus(String),

    /// A required response field is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The payload is not valid JSON or has the wrong overall structure.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_map_known_codes() {
        assert_eq!(
            ServiceErrorCode::from_code("ResourceNotFoundException"),
            ServiceErrorCode::ResourceNotFoundException,
        );
        assert_eq!(
            ServiceErrorCode::from_code("ConditionalCheckFailedException"),
            ServiceErrorCode::ConditionalCheckFailedException,
        );
    }

    #[test]
    fn test_should_preserve_unknown_codes() {
        let code = ServiceErrorCode::from_code("SomeFutureException");
        assert_eq!(
            code,
            ServiceErrorCode::Unknown("SomeFutureException".to_owned()),
        );
        assert_eq!(code.as_str(), "SomeFutureException");
    }

    #[test]
    fn test_should_flag_throttling_codes() {
        assert!(ServiceErrorCode::ProvisionedThroughputExceededException.is_throttling());
        assert!(ServiceErrorCode::ThrottlingException.is_throttling());
        assert!(!ServiceErrorCode::ValidationException.is_throttling());
    }

    #[test]
    fn test_should_display_service_error() {
        let err = ServiceError::new(
            ServiceErrorCode::ValidationException,
            "One or more parameter values were invalid",
        );
        assert_eq!(
            err.to_string(),
            "service error ValidationException: One or more parameter values were invalid",
        );
    }
}
