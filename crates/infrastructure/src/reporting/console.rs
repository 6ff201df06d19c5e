//! Console reporter.
//!
//! Renders the verification log on stdout: section banners, per-scenario
//! pass/fail lines, and the final summary. The rendering is a pure
//! function of the reported values.

use apiprobe_application::ports::Reporter;
use apiprobe_domain::{RunReport, ScenarioResult};

const BANNER_WIDTH: usize = 60;
const DIVIDER_WIDTH: usize = 40;

/// Reporter that writes the verification log to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Creates a new console reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    const fn status_glyph(passed: bool) -> &'static str {
        if passed { "✅ PASS" } else { "❌ FAIL" }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, title: &str) {
        println!("\n{}", "=".repeat(BANNER_WIDTH));
        println!("Testing: {title}");
        println!("{}", "=".repeat(BANNER_WIDTH));
    }

    fn note(&self, line: &str) {
        println!("{line}");
    }

    fn result(&self, result: &ScenarioResult) {
        println!("{} - {}", Self::status_glyph(result.passed), result.name);
        if !result.detail.is_empty() {
            println!("Details: {}", result.detail);
        }
        println!("{}", "-".repeat(DIVIDER_WIDTH));
    }

    fn summary(&self, report: &RunReport) {
        println!("\n{}", "=".repeat(BANNER_WIDTH));
        println!("TEST SUMMARY");
        println!("{}", "=".repeat(BANNER_WIDTH));

        for result in &report.results {
            println!("{} - {}", Self::status_glyph(result.passed), result.name);
        }

        println!("\nOverall: {}/{} checks passed", report.passed, report.total);

        if report.all_passed() {
            println!("🎉 All contract checks passed!");
        } else {
            println!("⚠️  Some checks failed - see details above");
        }
    }
}
