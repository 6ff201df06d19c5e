//! Request specification types
//!
//! A `RequestSpec` describes one HTTP exchange the verifier performs:
//! method, absolute URL, optional JSON body, and a bounded timeout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// HTTP methods the verifier can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method
    #[default]
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP PATCH method
    Patch,
    /// HTTP DELETE method
    Delete,
}

impl HttpMethod {
    /// Returns the method as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single HTTP exchange to perform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method to use.
    pub method: HttpMethod,
    /// Absolute request URL.
    pub url: String,
    /// Optional JSON body, sent as `application/json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl RequestSpec {
    /// Creates a GET request with the default timeout.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Creates a POST request carrying a JSON body.
    #[must_use]
    pub fn post_json(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(body),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Creates a bodyless request with an arbitrary method.
    #[must_use]
    pub fn bare(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_get_request_defaults() {
        let request = RequestSpec::get("http://localhost/api");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "http://localhost/api");
        assert_eq!(request.body, None);
        assert_eq!(request.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_post_json_request() {
        let body = serde_json::json!({"firstName": "John"});
        let request = RequestSpec::post_json("http://localhost/api/contacts", body.clone());
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(body));
    }

    #[test]
    fn test_bare_request() {
        let request = RequestSpec::bare(HttpMethod::Delete, "http://localhost/api/contacts");
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.body, None);
    }
}
