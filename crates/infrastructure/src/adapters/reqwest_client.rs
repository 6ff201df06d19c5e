//! HTTP client adapter built on reqwest.
//!
//! Implements the `HttpClient` port from the application layer. All
//! network communication for the verifier goes through this adapter.

use std::time::{Duration, Instant};

use apiprobe_application::ports::{HttpClient, HttpClientError, HttpClientFuture};
use apiprobe_domain::{HttpMethod, RequestSpec, ResponseSpec};
use reqwest::{Client, Method, Url};

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` with the verifier's defaults: a per-request
/// timeout taken from the `RequestSpec`, bounded redirects, and TLS
/// verification enabled.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("apiprobe/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates an adapter around a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts the domain `HttpMethod` to a reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to port errors.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            let message = error.to_string();
            if message.to_lowercase().contains("refused") {
                let host = error
                    .url()
                    .and_then(Url::host_str)
                    .unwrap_or("unknown")
                    .to_string();
                return HttpClientError::ConnectionRefused { host };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: &RequestSpec) -> HttpClientFuture<'_> {
        let method = request.method;
        let url = request.url.clone();
        let body = request.body.clone();
        let timeout_ms = request.timeout_ms;

        Box::pin(async move {
            let parsed_url =
                Url::parse(&url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")))?;

            tracing::debug!(%method, url = %parsed_url, "dispatching request");

            let start = Instant::now();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), parsed_url)
                .timeout(Duration::from_millis(timeout_ms));

            if let Some(json) = &body {
                builder = builder.json(json);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Other(format!("failed to read body: {e}")))?
                .to_vec();

            Ok(ResponseSpec::new(status, body_bytes, start.elapsed()))
        })
    }
}
