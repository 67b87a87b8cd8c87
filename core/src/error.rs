use std::fmt;
use thiserror::Error;

/// The error type shared by credential loading and request signing.
///
/// Carries a coarse [`ErrorKind`] for matching, a human readable message
/// and an optional source chain.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No usable credential: absent, empty, or malformed key material
    CredentialInvalid,

    /// The request cannot be brought into signable form (malformed
    /// header values, empty content handed to the hasher, etc.)
    RequestInvalid,

    /// A config field is missing or holds a value that cannot work.
    ConfigInvalid,

    /// Everything else: I/O, network, services misbehaving
    Unexpected,
}

impl Error {
    /// Build an error of `kind` carrying a human-readable message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Which class of failure this is.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Shorthand for [`ErrorKind::CredentialInvalid`].
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Shorthand for [`ErrorKind::RequestInvalid`].
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Shorthand for [`ErrorKind::ConfigInvalid`].
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Shorthand for [`ErrorKind::Unexpected`].
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ErrorKind::CredentialInvalid => "credential invalid",
            ErrorKind::RequestInvalid => "request invalid",
            ErrorKind::ConfigInvalid => "config invalid",
            ErrorKind::Unexpected => "unexpected",
        };

        f.write_str(kind)
    }
}

/// The `Result` type this crate returns everywhere.
pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

// Failures turning requests into signable form are the caller's to fix,
// so everything out of the http crate maps to RequestInvalid.
impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_message() {
        let err = Error::credential_invalid("app secret is empty");
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert_eq!(err.to_string(), "app secret is empty");
    }

    #[test]
    fn test_source_is_chained() {
        let cause = "garbage\u{0}value".parse::<http::HeaderValue>().unwrap_err();
        let err: Error = cause.into();

        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::RequestInvalid.to_string(), "request invalid");
        assert_eq!(ErrorKind::Unexpected.to_string(), "unexpected");
    }
}
