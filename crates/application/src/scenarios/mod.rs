//! Scenario runners (one module per scenario).
//!
//! Each runner builds a request, sends it through the `HttpClient` port,
//! validates the response, and reports a `ScenarioResult`. Transport
//! failures never escape a runner: they are converted into failing
//! results so the suite always runs to completion.

mod api_status;
mod disallowed_methods;
mod invalid_email;
mod list_contacts;
mod missing_fields;
mod submit_contact;
mod unknown_routes;

pub use api_status::api_status;
pub use disallowed_methods::disallowed_methods;
pub use invalid_email::invalid_email;
pub use list_contacts::list_contacts;
pub use missing_fields::missing_fields;
pub use submit_contact::submit_contact;
pub use unknown_routes::unknown_routes;

use apiprobe_domain::{ResponseSpec, ScenarioResult};

use crate::ports::{HttpClientError, Reporter};

/// Echoes an exchange's status code and raw body through the reporter.
fn log_exchange(reporter: &dyn Reporter, response: &ResponseSpec) {
    reporter.note(&format!("Status Code: {}", response.status));
    reporter.note(&format!("Response: {}", response.body));
}

/// Converts a transport failure into a failing, reported result.
fn request_failed(
    reporter: &dyn Reporter,
    name: &str,
    error: &HttpClientError,
) -> ScenarioResult {
    finish(reporter, ScenarioResult::fail(name, format!("Request failed: {error}")))
}

/// Reports a finished result and hands it back to the suite.
fn finish(reporter: &dyn Reporter, result: ScenarioResult) -> ScenarioResult {
    reporter.result(&result);
    result
}
