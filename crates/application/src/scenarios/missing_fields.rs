//! Missing required fields rejection scenario.

use apiprobe_domain::{RequestSpec, ScenarioResult, Target, check};
use serde_json::json;

use super::{finish, log_exchange, request_failed};
use crate::ports::{HttpClient, Reporter};

const TITLE: &str = "Contact Form - Missing Required Fields";
const NAME: &str = "Missing Fields Validation";

/// Verifies a submission missing required fields is rejected with a 400
/// whose error text mentions the requirement.
pub async fn missing_fields(
    client: &dyn HttpClient,
    target: &Target,
    reporter: &dyn Reporter,
) -> ScenarioResult {
    reporter.section(TITLE);

    // lastName, email, and message are deliberately absent
    let incomplete = json!({
        "firstName": "Bob",
        "subject": "Test",
    });
    let request = RequestSpec::post_json(target.contacts(), incomplete);
    let response = match client.execute(&request).await {
        Ok(response) => response,
        Err(error) => return request_failed(reporter, NAME, &error),
    };
    log_exchange(reporter, &response);

    if response.status != 400 {
        return finish(
            reporter,
            ScenarioResult::fail(NAME, format!("Expected 400, got {}", response.status)),
        );
    }

    let error_text = response
        .body_as_json()
        .and_then(|body| body["error"].as_str().map(ToOwned::to_owned));
    match error_text {
        Some(text) if check::mentions(&text, "required") => finish(
            reporter,
            ScenarioResult::pass(NAME, "Correctly rejected missing required fields"),
        ),
        _ => finish(
            reporter,
            ScenarioResult::fail(NAME, "Error message doesn't mention required fields"),
        ),
    }
}
