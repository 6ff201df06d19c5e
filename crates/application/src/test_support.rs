//! In-memory stand-ins for the ports, shared by the scenario tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use apiprobe_domain::{RequestSpec, ResponseSpec, RunReport, ScenarioResult, Target};

use crate::ports::{HttpClient, HttpClientError, HttpClientFuture, Reporter};

/// Stub client that replays canned outcomes in FIFO order and records
/// every request it receives. Once exhausted it refuses connections.
pub struct StubHttpClient {
    outcomes: Mutex<VecDeque<Result<ResponseSpec, HttpClientError>>>,
    requests: Mutex<Vec<RequestSpec>>,
}

#[allow(clippy::unwrap_used)]
impl StubHttpClient {
    pub fn new(outcomes: Vec<Result<ResponseSpec, HttpClientError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Canned successful response with the given status and body.
    pub fn respond(status: u16, body: &str) -> Result<ResponseSpec, HttpClientError> {
        Ok(ResponseSpec::new(
            status,
            body.as_bytes().to_vec(),
            Duration::from_millis(5),
        ))
    }

    /// Canned transport failure.
    pub fn refuse() -> Result<ResponseSpec, HttpClientError> {
        Err(HttpClientError::ConnectionRefused {
            host: "stub.local".to_string(),
        })
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().unwrap().clone()
    }
}

#[allow(clippy::unwrap_used)]
impl HttpClient for StubHttpClient {
    fn execute(&self, request: &RequestSpec) -> HttpClientFuture<'_> {
        self.requests.lock().unwrap().push(request.clone());
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(Self::refuse);
        Box::pin(async move { outcome })
    }
}

/// Reporter that swallows all output.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn section(&self, _title: &str) {}
    fn note(&self, _line: &str) {}
    fn result(&self, _result: &ScenarioResult) {}
    fn summary(&self, _report: &RunReport) {}
}

/// Target pointing at a host only the stub will ever see.
#[allow(clippy::unwrap_used)]
pub fn target() -> Target {
    Target::new("http://stub.local").unwrap()
}
