//! Invalid email rejection scenario.

use apiprobe_domain::{ContactForm, RequestSpec, ScenarioResult, Target, check};

use super::{finish, log_exchange, request_failed};
use crate::ports::{HttpClient, Reporter};

const TITLE: &str = "Contact Form - Invalid Email";
const NAME: &str = "Invalid Email Validation";

fn fixture() -> ContactForm {
    ContactForm {
        first_name: "Jane".to_string(),
        last_name: "Smith".to_string(),
        // Deliberately malformed address
        email: "invalid-email".to_string(),
        subject: "Test".to_string(),
        message: "Test message".to_string(),
    }
}

/// Verifies a malformed email address is rejected with a 400 whose error
/// text mentions the email field.
pub async fn invalid_email(
    client: &dyn HttpClient,
    target: &Target,
    reporter: &dyn Reporter,
) -> ScenarioResult {
    reporter.section(TITLE);

    let request = RequestSpec::post_json(target.contacts(), fixture().to_json());
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
        Some(text) if check::mentions(&text, "email") => finish(
            reporter,
            ScenarioResult::pass(NAME, "Correctly rejected invalid email"),
        ),
        _ => finish(
            reporter,
            ScenarioResult::fail(NAME, "Error message doesn't mention email validation"),
        ),
    }
}
