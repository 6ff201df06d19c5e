//! Disallowed method handling scenario (three sub-cases).

use apiprobe_domain::{HttpMethod, RequestSpec, ScenarioResult, Target};

use super::finish;
use crate::ports::{HttpClient, Reporter};

const NAME: &str = "Invalid Methods Test";

/// Methods the contacts collection does not allow; each must answer 405.
const DISALLOWED: [HttpMethod; 3] = [HttpMethod::Put, HttpMethod::Delete, HttpMethod::Patch];

/// Verifies the contacts collection answers 405 for disallowed methods.
/// Any deviation fails the whole scenario.
pub async fn disallowed_methods(
    client: &dyn HttpClient,
    target: &Target,
    reporter: &dyn Reporter,
) -> ScenarioResult {
    reporter.section(NAME);

    let url = target.contacts();
    let mut deviations = Vec::new();
    for method in DISALLOWED {
        reporter.note(&format!("Testing {method} {url}"));

        match client.execute(&RequestSpec::bare(method, &url)).await {
            Ok(response) => {
                reporter.note(&format!("Status Code: {}", response.status));
                if response.status == 405 {
                    reporter.note(&format!("✅ Correctly returned 405 for {method}"));
                } else {
                    reporter.note(&format!(
                        "❌ Expected 405, got {} for {method}",
                        response.status
                    ));
                    deviations.push(format!("{method} returned {}", response.status));
                }
            }
            Err(error) => {
                reporter.note(&format!("❌ Request failed for {method}: {error}"));
                deviations.push(format!("{method} request failed: {error}"));
            }
        }
    }

    let result = if deviations.is_empty() {
        ScenarioResult::pass(NAME, "All invalid methods properly return 405")
    } else {
        ScenarioResult::fail(NAME, deviations.join("; "))
    };
    finish(reporter, result)
}
