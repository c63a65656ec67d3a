//! Domain-level error types.
//!
//! Errors are transport agnostic. The `create-user` binary renders them as
//! JSON on stderr; other inbound adapters map them to their own envelope.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Failure category of a sign-up attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Caller-supplied input violates a precondition. Raised before any side
    /// effect takes place.
    InvalidArgument,
    /// A collaborator failed or reported a negative result.
    ServiceError,
}

impl ErrorCode {
    /// Message used when an error of this category is raised with a blank one.
    #[must_use]
    pub const fn fallback_message(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid argument",
            Self::ServiceError => "collaborator failed without a message",
        }
    }
}

/// Failure reported by the sign-up flow.
///
/// The message is never blank: a blank input is replaced with
/// [`ErrorCode::fallback_message`]. Serialises as
/// `{"code": "service_error", "message": "...", "details": {...}}`, with
/// `details` omitted when absent.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::service("Could not create user");
/// assert_eq!(err.code(), ErrorCode::ServiceError);
/// assert_eq!(err.to_string(), "Could not create user");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Build an error of the given category.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            code.fallback_message().clone_into(&mut message);
        }
        Self {
            code,
            message,
            details: None,
        }
    }

    /// Shorthand for [`ErrorCode::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    /// Shorthand for [`ErrorCode::ServiceError`].
    #[must_use]
    pub fn service(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceError, message)
    }

    /// Attach structured details.
    ///
    /// ```
    /// use backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::service("mail relay down").with_details(json!({ "persisted": true }));
    /// assert_eq!(err.details(), Some(&json!({ "persisted": true })));
    /// ```
    #[must_use]
    pub fn with_details(self, details: Value) -> Self {
        Self {
            details: Some(details),
            ..self
        }
    }

    /// Failure category.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured details, if any.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
