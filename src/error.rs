// SPDX-License-Identifier: MPL-2.0

use thiserror::Error;

/// Why a service source could not deliver its list.
///
/// Errors travel inside [`crate::message::Message`], so every variant owns
/// plain strings and the type stays `Clone`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("{url} answered {status}: {text}")]
    Status { url: String, status: u16, text: String },

    #[error("could not decode the service list: {0}")]
    Decode(String),

    #[error("D-Bus call failed: {0}")]
    Bus(String),
}

impl From<zbus::Error> for SourceError {
    fn from(err: zbus::Error) -> Self {
        SourceError::Bus(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;
