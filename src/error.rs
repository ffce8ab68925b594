//! Crate-wide error type.
//!
//! Every public operation returns [`Result`]. None of these errors are caught or
//! retried inside the crate; they go straight back to the caller.

use crate::executor::RequestError;
use crate::json::ParseError;
use crate::models::HttpMethod;
use std::fmt;

/// Shorthand for results carrying an [`SdkError`].
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors returned by the SDK helpers.
#[derive(Debug, Clone)]
pub enum SdkError {
    /// Raised by [`log_and_throw`](crate::logging::log_and_throw) after the message was logged.
    ///
    /// Displays as exactly the message.
    LoggedFailure(String),

    /// JSON text could not be parsed.
    Parse(ParseError),

    /// The server answered with a status outside 200-299.
    Http {
        /// Status code of the response
        status: u16,
        /// Method that was sent
        method: HttpMethod,
        /// Requested address
        url: String,
    },

    /// The transport failed before a response was received.
    Transport(RequestError),

    /// Configuration could not be read or did not validate.
    Config(String),
}

impl SdkError {
    /// Status code of an `Http` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::LoggedFailure(message) => f.write_str(message),
            SdkError::Parse(err) => write!(f, "{}", err),
            SdkError::Http {
                status,
                method,
                url,
            } => write!(
                f,
                "{} could not {} URL {}",
                status,
                method.as_str().to_lowercase(),
                url
            ),
            SdkError::Transport(err) => write!(f, "{}", err),
            SdkError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for SdkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SdkError::Parse(err) => Some(err),
            SdkError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for SdkError {
    fn from(err: ParseError) -> Self {
        SdkError::Parse(err)
    }
}

impl From<RequestError> for SdkError {
    fn from(err: RequestError) -> Self {
        SdkError::Transport(err)
    }
}
