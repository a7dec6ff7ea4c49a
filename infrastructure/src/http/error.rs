//! Mapping from `reqwest` failures to transport errors

use bridge_application::TransportError;
use reqwest::StatusCode;
use std::error::Error as _;

/// Classify a `reqwest` error, keeping the full cause chain in the message
pub(crate) fn from_reqwest(error: reqwest::Error) -> TransportError {
    let message = describe(&error);

    if error.is_connect() {
        TransportError::Connection(message)
    } else if error.is_decode() {
        TransportError::Decode(message)
    } else {
        TransportError::Request(message)
    }
}

pub(crate) fn from_status(status: StatusCode, url: &str) -> TransportError {
    TransportError::Status {
        code: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        url: url.to_string(),
    }
}

pub(crate) fn from_body(error: serde_json::Error) -> TransportError {
    TransportError::Decode(error.to_string())
}

/// `error: cause: root cause`
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
