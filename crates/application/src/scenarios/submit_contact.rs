//! Valid contact submission scenario.

use apiprobe_domain::{CONTACT_RECORD_KEYS, ContactForm, RequestSpec, ScenarioResult, Target, check};

use super::{finish, log_exchange, request_failed};
use crate::ports::{HttpClient, Reporter};

const TITLE: &str = "Contact Form - Valid Submission";
const NAME: &str = "Valid Contact Submission";

fn fixture() -> ContactForm {
    ContactForm {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        subject: "Portfolio Inquiry".to_string(),
        message: "I'm interested in your portfolio and would like to discuss potential opportunities.".to_string(),
    }
}

/// Verifies a complete, well-formed submission is accepted and echoed
/// back intact.
pub async fn submit_contact(
    client: &dyn HttpClient,
    target: &Target,
    reporter: &dyn Reporter,
) -> ScenarioResult {
    reporter.section(TITLE);

    let form = fixture();
    let request = RequestSpec::post_json(target.contacts(), form.to_json());
    let response = match client.execute(&request).await {
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

    let success = body["success"].as_bool() == Some(true);
    if !success || !check::has_keys(&body, &["data", "message"]) {
        return finish(
            reporter,
            ScenarioResult::fail(
                NAME,
                "Response missing required structure (success, data, message)",
            ),
        );
    }

    let record = &body["data"];
    let missing = check::missing_keys(record, &CONTACT_RECORD_KEYS);
    if !missing.is_empty() {
        return finish(
            reporter,
            ScenarioResult::fail(
                NAME,
                format!("Missing fields in response: {}", missing.join(", ")),
            ),
        );
    }

    let echoed_intact = record["firstName"].as_str() == Some(form.first_name.as_str())
        && record["email"].as_str() == Some(form.email.as_str());
    if !echoed_intact {
        return finish(
            reporter,
            ScenarioResult::fail(NAME, "Data integrity issue - submitted data doesn't match"),
        );
    }

    finish(
        reporter,
        ScenarioResult::pass(NAME, "Contact submitted successfully with correct data"),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::{SilentReporter, StubHttpClient, target};
    use pretty_assertions::assert_eq;

    fn echoed_record(first_name: &str, email: &str) -> String {
        format!(
            r#"{{"success":true,"message":"Contact form submitted successfully!","data":{{"id":"1","firstName":"{first_name}","lastName":"Doe","email":"{email}","subject":"Portfolio Inquiry","message":"hello","createdAt":"2026-01-01T00:00:00Z"}}}}"#
        )
    }

    #[tokio::test]
    async fn passes_when_record_is_echoed_intact() {
        let client = StubHttpClient::new(vec![StubHttpClient::respond(
            200,
            &echoed_record("John", "john.doe@example.com"),
        )]);
        let result = submit_contact(&client, &target(), &SilentReporter).await;
        assert!(result.passed);
    }

    #[tokio::test]
    async fn sends_the_fixture_as_json_body() {
        let client = StubHttpClient::new(vec![StubHttpClient::respond(
            200,
            &echoed_record("John", "john.doe@example.com"),
        )]);
        submit_contact(&client, &target(), &SilentReporter).await;

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["firstName"], "John");
        assert_eq!(body["email"], "john.doe@example.com");
    }

    #[tokio::test]
    async fn fails_when_echoed_email_differs() {
        let client = StubHttpClient::new(vec![StubHttpClient::respond(
            200,
            &echoed_record("John", "someone.else@example.com"),
        )]);
        let result = submit_contact(&client, &target(), &SilentReporter).await;
        assert!(!result.passed);
        assert!(result.detail.contains("integrity"));
    }

    #[tokio::test]
    async fn fails_when_record_keys_are_missing() {
        let client = StubHttpClient::new(vec![StubHttpClient::respond(
            200,
            r#"{"success":true,"message":"ok","data":{"firstName":"John","email":"john.doe@example.com"}}"#,
        )]);
        let result = submit_contact(&client, &target(), &SilentReporter).await;
        assert!(!result.passed);
        assert!(result.detail.contains("createdAt"));
    }

    #[tokio::test]
    async fn fails_when_success_flag_is_false() {
        let client = StubHttpClient::new(vec![StubHttpClient::respond(
            200,
            r#"{"success":false,"message":"ok","data":{}}"#,
        )]);
        let result = submit_contact(&client, &target(), &SilentReporter).await;
        assert!(!result.passed);
    }

    #[tokio::test]
    async fn fails_on_unexpected_status() {
        let client = StubHttpClient::new(vec![StubHttpClient::respond(500, "oops")]);
        let result = submit_contact(&client, &target(), &SilentReporter).await;
        assert!(!result.passed);
        assert!(result.detail.contains("500"));
    }
}
