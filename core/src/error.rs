//! Error types for the comments API client.
//!
//! # Design
//! Exactly three failure kinds, all fatal to the individual call. They are
//! distinguishable variants so a caller can decide, e.g., that `Transport`
//! is worth retrying at its own layer while `Shape` is not. `Transport`
//! carries the configured base URL for diagnostics. The core never logs or
//! swallows an error; everything propagates.

use std::fmt;

/// Errors returned by `CommentClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The transport produced no response (connection failure, DNS error,
    /// timeout). Names the base URL the client was configured with.
    Transport { base_url: String, message: String },

    /// The response body is not valid JSON.
    Decode(String),

    /// The response body is valid JSON but not an object.
    Shape,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport { base_url, message } => {
                write!(f, "something went wrong while connecting to {base_url}: {message}")
            }
            ApiError::Decode(msg) => write!(f, "response is not valid JSON: {msg}"),
            ApiError::Shape => write!(f, "response is not a mapping"),
        }
    }
}

impl std::error::Error for ApiError {}
