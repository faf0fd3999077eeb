// SPDX-License-Identifier: MPL-2.0
use std::fmt;

use crate::application::port::TransportError;
use crate::domain::DateError;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Date(DateError),
    Fetch(FetchError),
    Lightbox(LightboxError),
    Transport(String),
}

/// Failures of a picture range request.
///
/// Each variant maps to a different user-facing message, see
/// [`FetchError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No response was obtained after every attempt was spent.
    Network(String),

    /// The API answered with a non-success status that was not retried,
    /// or a retryable status that persisted through the last attempt.
    Api { status: u16, body: String },

    /// The response body was not an item or a list of items.
    Parse(String),
}

impl FetchError {
    /// Text shown to the user when a gallery load fails.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Api { status: 504, .. } => "Server timeout (504). Try again in a moment.",
            FetchError::Api { .. } => {
                "Failed to load images. Try a smaller range or check your network/API key."
            }
            FetchError::Network(_) => {
                "Could not reach the picture service. Check your connection and try again later."
            }
            FetchError::Parse(_) => "Failed to load images. The service returned unexpected data.",
        }
    }

    /// HTTP status of an API failure, if there was a response at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Api { status, .. } => Some(*status),
            FetchError::Network(_) | FetchError::Parse(_) => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network failure: {}", msg),
            FetchError::Api { status, body } => write!(f, "API error: {} {}", status, body),
            FetchError::Parse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxError {
    /// The requested slot does not exist in the active slot list.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for LightboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightboxError::IndexOutOfRange { index, len } => {
                write!(f, "Slot {} is out of range (gallery has {} slots)", index, len)
            }
        }
    }
}

impl std::error::Error for LightboxError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Date(e) => write!(f, "Date Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Lightbox(e) => write!(f, "Lightbox Error: {}", e),
            Error::Transport(e) => write!(f, "Transport Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DateError> for Error {
    fn from(err: DateError) -> Self {
        Error::Date(err)
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<LightboxError> for Error {
    fn from(err: LightboxError) -> Self {
        Error::Lightbox(err)
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Config(format!("invalid URL: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
