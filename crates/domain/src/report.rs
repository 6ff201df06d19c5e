//! Scenario results and run reporting.
//!
//! Scenario runners never propagate failures as errors: every outcome,
//! including a transport failure, becomes a `ScenarioResult`. The run
//! report aggregates those results and decides the process exit status.

use serde::{Deserialize, Serialize};

/// Outcome of a single verification scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario display name.
    pub name: String,
    /// Whether the scenario passed.
    pub passed: bool,
    /// Human-readable detail line.
    pub detail: String,
}

impl ScenarioResult {
    /// Creates a passing result.
    #[must_use]
    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            detail: detail.into(),
        }
    }

    /// Creates a failing result.
    #[must_use]
    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            detail: detail.into(),
        }
    }
}

/// Aggregated results from a full verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Individual scenario results in execution order.
    pub results: Vec<ScenarioResult>,
    /// Total number of scenarios.
    pub total: usize,
    /// Number of passing scenarios.
    pub passed: usize,
    /// Number of failing scenarios.
    pub failed: usize,
}

impl RunReport {
    /// Creates a report from an ordered list of scenario results.
    #[must_use]
    pub fn new(results: Vec<ScenarioResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;

        Self {
            results,
            total,
            passed,
            failed,
        }
    }

    /// Returns true if every scenario passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
