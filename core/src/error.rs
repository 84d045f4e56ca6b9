//! Error types for the inventory client.
//!
//! # Design
//! The variants follow where a failure is detected. `Validation` and
//! `InvalidPrice` never leave the process; `Transport`, `NotFound` and
//! `HttpError` come from the round-trip; `Parse` and `Schema` come from
//! reading a list body. Every variant is recoverable: the controller turns it
//! into a status message and leaves the view in its previous state.

use std::fmt;

use crate::http::TransportError;

/// Errors returned by `ItemClient` and `Inventory` operations.
#[derive(Debug)]
pub enum ApiError {
    /// At least one required form field is empty.
    Validation,

    /// The price field is not a finite number.
    InvalidPrice(String),

    /// The request never produced a response.
    Transport(TransportError),

    /// The server returned 404.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The response body is not valid JSON.
    Parse(String),

    /// The response body is valid JSON but not a sequence of items.
    Schema,

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation => write!(f, "required field missing"),
            ApiError::InvalidPrice(_) => write!(f, "price must be a number"),
            ApiError::Transport(err) => write!(f, "{err}"),
            ApiError::NotFound => write!(f, "item not found"),
            ApiError::HttpError { status, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {status}")
                } else {
                    write!(f, "HTTP {status}: {body}")
                }
            }
            ApiError::Parse(msg) => write!(f, "{msg}"),
            ApiError::Schema => write!(f, "response is not a list of items"),
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err)
    }
}
