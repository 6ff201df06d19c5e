//! API status scenario.

use apiprobe_domain::{RequestSpec, ScenarioResult, Target, check};

use super::{finish, log_exchange, request_failed};
use crate::ports::{HttpClient, Reporter};

const NAME: &str = "API Status Test";

/// Endpoint descriptors the status payload must advertise.
const EXPECTED_ENDPOINTS: [&str; 3] = ["GET /api", "GET /api/contacts", "POST /api/contacts"];

/// Verifies `GET /api` reports a running service advertising the
/// expected endpoints.
pub async fn api_status(
    client: &dyn HttpClient,
    target: &Target,
    reporter: &dyn Reporter,
) -> ScenarioResult {
    reporter.section(NAME);

    let response = match client.execute(&RequestSpec::get(target.api_root())).await {
        Ok(response) => response,
        Err(error) => return request_failed(reporter, NAME, &error),
    };
    log_exchange(reporter, &response);

    if response.status != 200 {
        return finish(
            reporter,
            ScenarioResult::fail(NAME, format!("Expected 200, got {}", response.status)),
        );
    }

    let Some(body) = response.body_as_json() else {
        return finish(
            reporter,
            ScenarioResult::fail(NAME, "Response body is not valid JSON"),
        );
    };

    if !check::has_keys(&body, &["message", "endpoints"]) {
        return finish(
            reporter,
            ScenarioResult::fail(NAME, "Response missing required fields (message, endpoints)"),
        );
    }

    let missing = check::missing_keys(&body["endpoints"], &EXPECTED_ENDPOINTS);
    if !missing.is_empty() {
        return finish(
            reporter,
            ScenarioResult::fail(
                NAME,
                format!("Missing expected endpoints: {}", missing.join(", ")),
            ),
        );
    }

    finish(
        reporter,
        ScenarioResult::pass(NAME, "API is running with correct endpoints"),
    )
}
