//! HTTP client port.

use std::future::Future;
use std::pin::Pin;

use apiprobe_domain::{RequestSpec, ResponseSpec};
use thiserror::Error;

/// Transport-level errors surfaced by HTTP client adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within its timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The remote host refused the connection.
    #[error("connection refused by {host}")]
    ConnectionRefused {
        /// Host that refused the connection.
        host: String,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Boxed future returned by [`HttpClient::execute`].
pub type HttpClientFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + 'a>>;

/// Port for performing HTTP exchanges.
///
/// Adapters in the infrastructure layer implement this; scenario code
/// depends only on the trait so it can be exercised with an in-memory
/// stub.
pub trait HttpClient: Send + Sync {
    /// Executes the request, returning the response or a transport error.
    fn execute(&self, request: &RequestSpec) -> HttpClientFuture<'_>;
}
