//! Reporter port.

use apiprobe_domain::{RunReport, ScenarioResult};

/// Port for emitting the human-readable verification log.
///
/// Scenario runners narrate every exchange through this trait; the
/// console adapter renders the lines on stdout.
pub trait Reporter: Send + Sync {
    /// Announces the start of a named scenario section.
    fn section(&self, title: &str);

    /// Emits a free-form log line (request echo, status code, raw body).
    fn note(&self, line: &str);

    /// Emits the pass/fail line for a completed scenario.
    fn result(&self, result: &ScenarioResult);

    /// Emits the final summary for the whole run.
    fn summary(&self, report: &RunReport);
}
