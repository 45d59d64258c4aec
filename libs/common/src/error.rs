//! Custom error types for the common library
//!
//! This module defines the failure kinds every resource client can return.
//! Callers branch on the variant instead of parsing messages.

use reqwest::StatusCode;
use thiserror::Error;

/// Custom error type for API client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-2xx status
    #[error("HTTP {status}{}{}", text_suffix(.status_text), body_suffix(.body))]
    Http {
        status: u16,
        status_text: String,
        /// Raw response body, kept only when it was readable and non-empty
        body: Option<String>,
    },

    /// A 2xx body that is not valid JSON or does not match the expected type
    #[error("Invalid JSON response from server")]
    Decode {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// A 2xx response with no body where a single item was expected
    #[error("Empty response body from {url}")]
    EmptyBody { url: String },

    /// Connection, DNS or body read failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Configuration error
    #[error("Client configuration error: {0}")]
    Configuration(String),
}

fn text_suffix(status_text: &str) -> String {
    if status_text.is_empty() {
        String::new()
    } else {
        format!(": {}", status_text)
    }
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(text) => format!(" - {}", text),
        None => String::new(),
    }
}

impl ClientError {
    /// Build an HTTP failure from a status and an optionally read body
    pub fn http(status: StatusCode, body: Option<String>) -> Self {
        ClientError::Http {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            body: body.filter(|text| !text.is_empty()),
        }
    }

    /// HTTP status carried by the failure, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the failure means the requested item does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::EmptyBody { .. })
            || self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

/// Type alias for Result with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_message_includes_body() {
        let err = ClientError::http(StatusCode::NOT_FOUND, Some("not found".to_string()));
        assert_eq!(err.to_string(), "HTTP 404: Not Found - not found");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_http_message_without_body() {
        let err = ClientError::http(StatusCode::INTERNAL_SERVER_ERROR, Some(String::new()));
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
        assert!(!err.is_not_found());

        match err {
            ClientError::Http { body, .. } => assert!(body.is_none()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_message_without_canonical_reason() {
        let status = StatusCode::from_u16(599).unwrap();

        let err = ClientError::http(status, None);
        assert_eq!(err.to_string(), "HTTP 599");

        let err = ClientError::http(status, Some("upstream gave up".to_string()));
        assert_eq!(err.to_string(), "HTTP 599 - upstream gave up");
    }

    #[test]
    fn test_decode_message_is_fixed() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ClientError::Decode {
            raw: "{not json".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "Invalid JSON response from server");
        assert_eq!(err.status(), None);
    }
}
