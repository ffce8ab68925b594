//! Transport error types.
//!
//! A [`RequestError`] means no response was received at all. A response with a
//! failing status is [`SdkError::Http`](crate::error::SdkError::Http) instead.

use reqwest::header::InvalidHeaderName;
use std::fmt;
use std::sync::Arc;

/// Failures reported by a [`Transport`](super::Transport).
///
/// `get` and `post` return these untouched inside
/// [`SdkError::Transport`](crate::error::SdkError::Transport). Errors from reqwest are
/// kept whole, so [`source`](std::error::Error::source) reaches their cause chain.
#[derive(Debug, Clone)]
pub enum RequestError {
    /// reqwest failed to connect, send, receive or time the request.
    Reqwest(Arc<reqwest::Error>),

    /// The target address could not be parsed.
    InvalidUrl(url::ParseError),

    /// The address parsed but its scheme is not `http` or `https`.
    UnsupportedProtocol(String),

    /// A configured default header has a name or value HTTP does not allow.
    InvalidHeader(String),
}

impl RequestError {
    /// The reqwest error, when reqwest produced this failure.
    pub fn reqwest(&self) -> Option<&reqwest::Error> {
        match self {
            RequestError::Reqwest(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.reqwest().is_some_and(|e| e.is_timeout())
    }

    pub fn is_connect(&self) -> bool {
        self.reqwest().is_some_and(|e| e.is_connect())
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Reqwest(err) => write!(f, "{}", err),
            RequestError::InvalidUrl(err) => write!(f, "Invalid URL: {}", err),
            RequestError::UnsupportedProtocol(scheme) => {
                write!(f, "Unsupported protocol {:?}: only http and https are allowed", scheme)
            }
            RequestError::InvalidHeader(name) => write!(f, "Invalid header: {}", name),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Reqwest(err) => Some(err.as_ref()),
            RequestError::InvalidUrl(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        RequestError::Reqwest(Arc::new(err))
    }
}

impl From<url::ParseError> for RequestError {
    fn from(err: url::ParseError) -> Self {
        RequestError::InvalidUrl(err)
    }
}

impl From<InvalidHeaderName> for RequestError {
    fn from(err: InvalidHeaderName) -> Self {
        RequestError::InvalidHeader(err.to_string())
    }
}
