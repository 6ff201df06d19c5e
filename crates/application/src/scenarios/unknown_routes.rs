//! Unknown route handling scenario (three sub-cases).

use apiprobe_domain::{RequestSpec, ScenarioResult, Target};

use super::finish;
use crate::ports::{HttpClient, Reporter};

const NAME: &str = "Invalid Routes Test";

/// Paths the API does not define; each must answer 404.
const UNKNOWN_PATHS: [&str; 3] = ["/api/invalid", "/api/users", "/api/contacts/123"];

/// Verifies every undefined path answers 404. Any deviation fails the
/// whole scenario.
pub async fn unknown_routes(
    client: &dyn HttpClient,
    target: &Target,
    reporter: &dyn Reporter,
) -> ScenarioResult {
    reporter.section(NAME);

    let mut deviations = Vec::new();
    for path in UNKNOWN_PATHS {
        let url = target.route(path);
        reporter.note(&format!("Testing route: {url}"));

        match client.execute(&RequestSpec::get(&url)).await {
            Ok(response) => {
                reporter.note(&format!("Status Code: {}", response.status));
                if response.status == 404 {
                    reporter.note(&format!("✅ Correctly returned 404 for {url}"));
                } else {
                    reporter.note(&format!(
                        "❌ Expected 404, got {} for {url}",
                        response.status
                    ));
                    deviations.push(format!("{path} returned {}", response.status));
                }
            }
            Err(error) => {
                reporter.note(&format!("❌ Request failed for {url}: {error}"));
                deviations.push(format!("{path} request failed: {error}"));
            }
        }
    }

    let result = if deviations.is_empty() {
        ScenarioResult::pass(NAME, "All invalid routes properly return 404")
    } else {
        ScenarioResult::fail(NAME, deviations.join("; "))
    };
    finish(reporter, result)
}
