//! Fixed-order scenario suite.

use apiprobe_domain::{RunReport, Target};
use chrono::{SecondsFormat, Utc};

use crate::ports::{HttpClient, Reporter};
use crate::scenarios;

/// Runs all seven scenarios in their fixed order and reports the summary.
///
/// The order is part of the harness's observable output and is
/// deliberately hardcoded. The route/method scenarios assume the contacts
/// collection endpoint exists; they run last, after the collection checks
/// have already told the operator whether that assumption holds.
pub async fn run_suite(
    client: &dyn HttpClient,
    target: &Target,
    reporter: &dyn Reporter,
) -> RunReport {
    reporter.note("Starting portfolio backend contract checks");
    reporter.note(&format!("Base URL: {}", target.base()));
    reporter.note(&format!("API Base: {}", target.api_root()));
    reporter.note(&format!(
        "Run Time: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    ));

    let results = vec![
        scenarios::api_status(client, target, reporter).await,
        scenarios::submit_contact(client, target, reporter).await,
        scenarios::invalid_email(client, target, reporter).await,
        scenarios::missing_fields(client, target, reporter).await,
        scenarios::list_contacts(client, target, reporter).await,
        scenarios::unknown_routes(client, target, reporter).await,
        scenarios::disallowed_methods(client, target, reporter).await,
    ];

    let report = RunReport::new(results);
    reporter.summary(&report);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SilentReporter, StubHttpClient, target};
    use pretty_assertions::assert_eq;

    /// Responses that satisfy every scenario, in request order: one each
    /// for the five single-exchange scenarios, then three 404s and three
    /// 405s for the sub-case scenarios.
    fn compliant_outcomes() -> StubHttpClient {
        StubHttpClient::new(vec![
            StubHttpClient::respond(
                200,
                r#"{"message":"running","endpoints":{"GET /api":"status","GET /api/contacts":"list","POST /api/contacts":"create"}}"#,
            ),
            StubHttpClient::respond(
                200,
                r#"{"success":true,"message":"ok","data":{"id":"1","firstName":"John","lastName":"Doe","email":"john.doe@example.com","subject":"Portfolio Inquiry","message":"hi","createdAt":"2026-01-01T00:00:00Z"}}"#,
            ),
            StubHttpClient::respond(400, r#"{"error":"Invalid email format"}"#),
            StubHttpClient::respond(400, r#"{"error":"Missing required fields"}"#),
            StubHttpClient::respond(200, r#"{"success":true,"data":[],"count":0}"#),
            StubHttpClient::respond(404, r#"{"error":"Route not found"}"#),
            StubHttpClient::respond(404, r#"{"error":"Route not found"}"#),
            StubHttpClient::respond(404, r#"{"error":"Route not found"}"#),
            StubHttpClient::respond(405, r#"{"error":"Method not allowed"}"#),
            StubHttpClient::respond(405, r#"{"error":"Method not allowed"}"#),
            StubHttpClient::respond(405, r#"{"error":"Method not allowed"}"#),
        ])
    }

    #[tokio::test]
    async fn compliant_api_passes_every_scenario() {
        let client = compliant_outcomes();
        let report = run_suite(&client, &target(), &SilentReporter).await;

        assert_eq!(report.total, 7);
        assert_eq!(report.failed, 0);
        assert!(report.all_passed());
        assert_eq!(client.requests().len(), 11);
    }

    #[tokio::test]
    async fn scenario_order_is_fixed() {
        let client = compliant_outcomes();
        let report = run_suite(&client, &target(), &SilentReporter).await;

        let names: Vec<&str> = report.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "API Status Test",
                "Valid Contact Submission",
                "Invalid Email Validation",
                "Missing Fields Validation",
                "Contact Retrieval",
                "Invalid Routes Test",
                "Invalid Methods Test",
            ]
        );
    }

    #[tokio::test]
    async fn unreachable_api_fails_every_scenario_without_aborting() {
        // An exhausted stub refuses every request.
        let client = StubHttpClient::new(Vec::new());
        let report = run_suite(&client, &target(), &SilentReporter).await;

        assert_eq!(report.total, 7);
        assert_eq!(report.passed, 0);
        assert!(!report.all_passed());
        for result in &report.results {
            assert!(result.detail.contains("failed"), "{}", result.detail);
        }
    }
}
