//! Error vocabulary shared by every API operation.
//!
//! Every failure an operation can produce is an [`Error`] value carrying an
//! [`ErrorKind`] for programmatic matching, a human readable message and
//! optional structured details. Errors fall in three propagation classes:
//!
//! - **validation** kinds are produced locally before any request is made
//! - **transport** kinds are produced by the [`Transport`](crate::transport::Transport)
//!   and handed back unchanged
//! - `unexpected_response` is produced when a successful response does not
//!   have the expected shape

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::ParseError;

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    // input validation
    InvalidId,
    EmptyId,
    InvalidToken,
    EmptyToken,
    InvalidType,
    EmptyList,

    // HTTP status
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    RateLimited,
    ServerError,
    ServiceUnavailable,

    // client side
    NetworkError,
    Timeout,
    JsonDecodeError,
    UnexpectedResponse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidId => "invalid_id",
            ErrorKind::EmptyId => "empty_id",
            ErrorKind::InvalidToken => "invalid_token",
            ErrorKind::EmptyToken => "empty_token",
            ErrorKind::InvalidType => "invalid_type",
            ErrorKind::EmptyList => "empty_list",
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not_found",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::ServerError => "server_error",
            ErrorKind::ServiceUnavailable => "service_unavailable",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::JsonDecodeError => "json_decode_error",
            ErrorKind::UnexpectedResponse => "unexpected_response",
        }
    }

    /// Kinds raised by argument validation, before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidId
                | ErrorKind::EmptyId
                | ErrorKind::InvalidToken
                | ErrorKind::EmptyToken
                | ErrorKind::InvalidType
                | ErrorKind::EmptyList
        )
    }

    /// Kinds surfaced by the transport (HTTP status, network and decoding failures).
    pub fn is_transport(&self) -> bool {
        !self.is_validation() && *self != ErrorKind::UnexpectedResponse
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed API operation.
///
/// Errors are created once and returned; the builder methods consume `self`
/// and are only meant to be used while constructing the value.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = kind.as_str().to_string();
        }

        Error {
            kind,
            message,
            details: None,
            http_status: None,
        }
    }

    pub fn with_details(mut self, details: Map<String, Value>) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Looks up a single entry of [`Error::details`].
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }

    pub fn network(message: impl fmt::Display) -> Self {
        Error::new(
            ErrorKind::NetworkError,
            format!("Network error: {}", message),
        )
    }

    pub fn timeout(message: impl fmt::Display) -> Self {
        Error::new(ErrorKind::Timeout, format!("Request timed out: {}", message))
    }

    pub fn json_decode(message: impl fmt::Display) -> Self {
        Error::new(
            ErrorKind::JsonDecodeError,
            format!("Failed to decode JSON response: {}", message),
        )
    }

    /// A successful response that is missing the structure an operation expects.
    pub fn unexpected_response(message: impl Into<String>, response: &Value) -> Self {
        Error::new(ErrorKind::UnexpectedResponse, message).with_detail("response", response.clone())
    }

    /// Maps a non-success HTTP status and its decoded body to an error.
    ///
    /// For `429` the retry delay is read from `retry_after` or `Retry-After`
    /// in the body and exposed as `details.retry_after`.
    pub fn from_http_status(status: u16, body: &Value) -> Self {
        let (kind, base) = match status {
            400 => (ErrorKind::BadRequest, "Bad request".to_string()),
            401 => (
                ErrorKind::Unauthorized,
                "Unauthorized: the access token is invalid or expired".to_string(),
            ),
            403 => (ErrorKind::Forbidden, "Forbidden".to_string()),
            404 => (ErrorKind::NotFound, "Resource not found".to_string()),
            429 => (ErrorKind::RateLimited, String::new()),
            502 | 503 => (
                ErrorKind::ServiceUnavailable,
                "Service unavailable".to_string(),
            ),
            500..=599 => (ErrorKind::ServerError, "Server error".to_string()),
            _ => (
                ErrorKind::ServerError,
                format!("Unexpected HTTP status {}", status),
            ),
        };

        let mut err = Error::new(kind, base)
            .with_http_status(status)
            .with_detail("status", status)
            .with_detail("response_body", body.clone());

        if kind == ErrorKind::RateLimited {
            err.message = match retry_after(body) {
                Some(seconds) => {
                    let message = format!(
                        "Rate limit exceeded. Retry after {} seconds",
                        display_scalar(&seconds)
                    );
                    err = err.with_detail("retry_after", seconds);
                    message
                }
                None => "Rate limit exceeded".to_string(),
            };
        } else if let Some(upstream) = upstream_message(body) {
            err.message = format!("{}: {}", err.message, upstream);
        }

        err
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        let base = Error::new(
            ErrorKind::UnexpectedResponse,
            format!("Malformed response: {}", err),
        );

        match err {
            ParseError::MissingRequiredField { entity, fields } => base
                .with_detail("entity", entity)
                .with_detail("fields", fields),
            ParseError::InvalidField { entity, field } => base
                .with_detail("entity", entity)
                .with_detail("field", field),
        }
    }
}

fn retry_after(body: &Value) -> Option<Value> {
    ["retry_after", "Retry-After"]
        .iter()
        .filter_map(|key| body.get(key))
        .find(|v| !v.is_null())
        .cloned()
}

// Web API errors come as {"error": {"status": 404, "message": "..."}}, the
// accounts service answers with {"error": "...", "error_description": "..."}.
fn upstream_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Object(obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(String::from),
        Value::String(code) => Some(
            body.get("error_description")
                .and_then(Value::as_str)
                .map(String::from)
                .unwrap_or_else(|| code.clone()),
        ),
        _ => None,
    }
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn new_never_has_empty_message() {
        let err = Error::new(ErrorKind::NotFound, "");
        assert_eq!(err.message, "not_found");
        assert!(err.details.is_none());
        assert!(err.http_status.is_none());
    }

    #[test]
    fn rate_limited_with_retry_after() {
        let err = Error::from_http_status(429, &json!({ "retry_after": 30 }));
        assert_eq!(err.kind, ErrorKind::RateLimited);
        assert_eq!(err.http_status, Some(429));
        assert!(err.message.contains("30 seconds"));
        assert_eq!(err.detail("retry_after"), Some(&json!(30)));
    }

    #[test]
    fn rate_limited_reads_header_style_key() {
        let err = Error::from_http_status(429, &json!({ "Retry-After": "12" }));
        assert_eq!(err.message, "Rate limit exceeded. Retry after 12 seconds");
        assert_eq!(err.detail("retry_after"), Some(&json!("12")));
    }

    #[test]
    fn rate_limited_without_retry_after() {
        let err = Error::from_http_status(429, &json!({}));
        assert_eq!(err.message, "Rate limit exceeded");
        assert!(err.detail("retry_after").is_none());
    }

    #[test]
    fn maps_known_statuses() {
        let body = json!({ "error": { "status": 404, "message": "Non existing id" } });
        let err = Error::from_http_status(404, &body);
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Resource not found: Non existing id");
        assert_eq!(err.detail("response_body"), Some(&body));

        assert_eq!(
            Error::from_http_status(400, &Value::Null).kind,
            ErrorKind::BadRequest
        );
        assert_eq!(
            Error::from_http_status(401, &Value::Null).kind,
            ErrorKind::Unauthorized
        );
        assert_eq!(
            Error::from_http_status(403, &Value::Null).kind,
            ErrorKind::Forbidden
        );
        assert_eq!(
            Error::from_http_status(500, &Value::Null).kind,
            ErrorKind::ServerError
        );
        assert_eq!(
            Error::from_http_status(502, &Value::Null).kind,
            ErrorKind::ServiceUnavailable
        );
        assert_eq!(
            Error::from_http_status(503, &Value::Null).kind,
            ErrorKind::ServiceUnavailable
        );
    }

    #[test]
    fn unmapped_status_falls_back_to_server_error() {
        let err = Error::from_http_status(418, &json!({}));
        assert_eq!(err.kind, ErrorKind::ServerError);
        assert_eq!(err.http_status, Some(418));
        assert_eq!(err.detail("status"), Some(&json!(418)));
    }

    #[test]
    fn accounts_service_error_description() {
        let body = json!({ "error": "invalid_client", "error_description": "Invalid client" });
        let err = Error::from_http_status(400, &body);
        assert_eq!(err.message, "Bad request: Invalid client");
    }

    #[test]
    fn parse_error_becomes_unexpected_response() {
        let err: Error = ParseError::MissingRequiredField {
            entity: "Album",
            fields: vec!["id", "name", "type", "uri"],
        }
        .into();
        assert_eq!(err.kind, ErrorKind::UnexpectedResponse);
        assert_eq!(err.detail("entity"), Some(&json!("Album")));
        assert_eq!(
            err.detail("fields"),
            Some(&json!(["id", "name", "type", "uri"]))
        );
    }

    #[test]
    fn kind_classes() {
        assert!(ErrorKind::EmptyList.is_validation());
        assert!(!ErrorKind::EmptyList.is_transport());
        assert!(ErrorKind::Timeout.is_transport());
        assert!(!ErrorKind::UnexpectedResponse.is_transport());
        assert!(!ErrorKind::UnexpectedResponse.is_validation());
        assert_eq!(ErrorKind::JsonDecodeError.to_string(), "json_decode_error");
    }
}
