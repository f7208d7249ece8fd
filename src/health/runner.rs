//! Test runner for orchestrating health checks

use std::time::Instant;

use tracing::{debug, warn};

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// Results from running a health check suite
#[derive(Debug, Default)]
pub struct HealthCheckReport {
    /// Individual check results with their system names
    pub results: Vec<(String, CheckResult)>,
}

impl HealthCheckReport {
    fn count(&self, status: CheckStatus) -> usize {
        self.results
            .iter()
            .filter(|(_, result)| result.status == status)
            .count()
    }

    /// Total number of checks run
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of passing checks
    pub fn passed(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    /// Number of checks with warnings
    pub fn warned(&self) -> usize {
        self.count(CheckStatus::Warn)
    }

    /// Number of failing checks
    pub fn failed(&self) -> usize {
        self.count(CheckStatus::Fail)
    }

    /// Returns true if no check failed
    pub fn is_healthy(&self) -> bool {
        self.failed() == 0
    }

    /// Returns true if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.warned() > 0
    }

    /// Returns the appropriate exit code for this report
    /// 0 = all pass, 1 = any fail, 2 = any warn (but no fail)
    pub fn exit_code(&self) -> i32 {
        if self.failed() > 0 {
            1
        } else if self.warned() > 0 {
            2
        } else {
            0
        }
    }
}

/// Orchestrates running health checks and collecting results
#[derive(Default)]
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a check to the runner
    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Runs all registered checks in order and returns a report
    pub fn run(self) -> HealthCheckReport {
        let results = self
            .checks
            .into_iter()
            .map(|check| {
                let name = check.name();
                let start = Instant::now();
                let result = check.check().with_duration(start.elapsed());

                if result.status.is_fail() {
                    warn!(check = name, message = %result.message, "Health check failed");
                } else {
                    debug!(check = name, status = ?result.status, "Health check finished");
                }

                (name.to_string(), result)
            })
            .collect();

        HealthCheckReport { results }
    }
}
