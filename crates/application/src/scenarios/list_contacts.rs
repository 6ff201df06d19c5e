//! Contact retrieval scenario.

use apiprobe_domain::{RequestSpec, ScenarioResult, Target, check};

use super::{finish, log_exchange, request_failed};
use crate::ports::{HttpClient, Reporter};

const TITLE: &str = "Contact Retrieval Test";
const NAME: &str = "Contact Retrieval";

/// Verifies the contacts collection lists stored submissions.
pub async fn list_contacts(
    client: &dyn HttpClient,
    target: &Target,
    reporter: &dyn Reporter,
) -> ScenarioResult {
    reporter.section(TITLE);

    let response = match client.execute(&RequestSpec::get(target.contacts())).await {
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

    if !check::has_keys(&body, &["success", "data", "count"]) {
        return finish(
            reporter,
            ScenarioResult::fail(NAME, "Response missing required fields (success, data, count)"),
        );
    }

    if body["success"].as_bool() == Some(true) && body["data"].is_array() {
        finish(
            reporter,
            ScenarioResult::pass(
                NAME,
                format!("Successfully retrieved {} contacts", body["count"]),
            ),
        )
    } else {
        finish(
            reporter,
            ScenarioResult::fail(NAME, "Invalid response structure or success flag"),
        )
    }
}
