//! Neutral HTTP shapes
//!
//! The transport-agnostic request and response types controllers consume and
//! produce. No framework types appear here; adapters translate at the
//! process boundary in both directions, which keeps the whole core testable
//! without a socket.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Header names shared between controllers and adapters
pub mod header {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const LAST_MODIFIED: &str = "Last-Modified";
}

/// Response statuses controllers are allowed to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatus {
    Ok,
    Created,
    BadRequest,
    NotFound,
    ServerError,
}

impl HttpStatus {
    /// Numeric wire code
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::ServerError => 500,
        }
    }
}

/// Transport-agnostic request
///
/// `params` holds router-extracted path parameters, `body` the parsed JSON
/// payload (an empty object when the wire carried none).
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub params: HashMap<String, String>,
    pub query: HashMap<String, String>,
    pub headers: HashMap<String, String>,
    pub body: Value,
}

impl HttpRequest {
    /// Request with the given method and path and nothing else
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// Add a path parameter
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Transport-agnostic response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: HttpStatus,
    pub body: Value,
    pub headers: HashMap<String, String>,
}

impl HttpResponse {
    /// JSON response with the content type already stamped
    pub fn json(status: HttpStatus, body: Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            header::CONTENT_TYPE.to_string(),
            "application/json".to_string(),
        );
        Self {
            status,
            body,
            headers,
        }
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Render a timestamp as an RFC 7231 HTTP date, the `Last-Modified` format
pub fn http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(HttpStatus::Ok.code(), 200);
        assert_eq!(HttpStatus::Created.code(), 201);
        assert_eq!(HttpStatus::BadRequest.code(), 400);
        assert_eq!(HttpStatus::NotFound.code(), 404);
        assert_eq!(HttpStatus::ServerError.code(), 500);
    }

    #[test]
    fn test_json_response_sets_content_type() {
        let response = HttpResponse::json(HttpStatus::Ok, json!({"ok": true}));

        assert_eq!(
            response.headers.get(header::CONTENT_TYPE).map(String::as_str),
            Some("application/json")
        );
        assert_eq!(response.body, json!({"ok": true}));
    }

    #[test]
    fn test_request_builder_collects_parts() {
        let request = HttpRequest::new("GET", "/projects/7")
            .with_param("id", "7")
            .with_header("User-Agent", "tests")
            .with_body(json!({"title": "x"}));

        assert_eq!(request.method, "GET");
        assert_eq!(request.params.get("id").map(String::as_str), Some("7"));
        assert_eq!(
            request.headers.get("User-Agent").map(String::as_str),
            Some("tests")
        );
        assert_eq!(request.body["title"], "x");
    }

    #[test]
    fn test_http_date_epoch() {
        let time = Utc.timestamp_opt(0, 0).single().expect("Valid timestamp");

        assert_eq!(http_date(time), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn test_http_date_known_instant() {
        let time = Utc
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 30)
            .single()
            .expect("Valid timestamp");

        assert_eq!(http_date(time), "Sat, 09 Mar 2024 14:05:30 GMT");
    }
}
