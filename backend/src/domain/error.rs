//! Domain-level error type.
//!
//! Transport agnostic: inbound adapters decide how a code becomes an HTTP
//! status, a redirect, or anything else. The message is the only part ever
//! shown to a caller; underlying causes stay in the server logs.

use std::fmt;

/// Stable machine-internal code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// No logged-in session is present.
    NotLoggedIn,
    /// Login credentials did not match a stored user.
    BadCredentials,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected failure inside the domain or an adapter.
    InternalError,
}

/// Domain error carrying a category and a client-safe message.
///
/// ## Invariants
/// - `message` is non-empty; it is the exact text a caller may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create a new error from a code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-internal error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Client-safe message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotLoggedIn`].
    pub fn not_logged_in() -> Self {
        Self::new(ErrorCode::NotLoggedIn, "login required")
    }

    /// Convenience constructor for [`ErrorCode::BadCredentials`].
    pub fn bad_credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadCredentials, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest, "bad")]
    #[case(Error::not_logged_in(), ErrorCode::NotLoggedIn, "login required")]
    #[case(
        Error::bad_credentials("Incorrect credentials"),
        ErrorCode::BadCredentials,
        "Incorrect credentials"
    )]
    #[case(Error::not_found("Post not found"), ErrorCode::NotFound, "Post not found")]
    #[case(Error::internal("boom"), ErrorCode::InternalError, "boom")]
    fn constructors_set_code_and_message(
        #[case] error: Error,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        assert_eq!(error.code(), code);
        assert_eq!(error.message(), message);
    }

    #[rstest]
    fn display_includes_code_and_message() {
        let error = Error::not_found("Post not found");
        let rendered = error.to_string();
        assert!(rendered.contains("NotFound"));
        assert!(rendered.contains("Post not found"));
    }
}
