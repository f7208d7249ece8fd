//! Core health check trait and types

use std::time::Duration;

/// Status of a system check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully
    Pass,
    /// Check passed with warnings
    Warn,
    /// Check failed
    Fail,
}

impl CheckStatus {
    /// Returns true if the check passed (Pass or Warn)
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Pass | CheckStatus::Warn)
    }

    /// Returns true if the check failed
    pub fn is_fail(&self) -> bool {
        matches!(self, CheckStatus::Fail)
    }

    /// Returns the status as a colored string
    pub fn as_colored_str(&self) -> String {
        use colored::Colorize;
        match self {
            CheckStatus::Pass => "PASS".green().to_string(),
            CheckStatus::Warn => "WARN".yellow().to_string(),
            CheckStatus::Fail => "FAIL".red().to_string(),
        }
    }
}

/// Result of a system check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The status of the check
    pub status: CheckStatus,
    /// Brief message describing the result
    pub message: String,
    /// Per-step lines, shown under the table when printing a report
    pub details: Vec<String>,
    /// How long the check took
    pub duration: Duration,
}

impl CheckResult {
    fn with_status(status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    /// Creates a passing check result
    pub fn pass(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Pass, message)
    }

    /// Creates a warning check result
    pub fn warn(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Warn, message)
    }

    /// Creates a failing check result
    pub fn fail(message: impl Into<String>) -> Self {
        Self::with_status(CheckStatus::Fail, message)
    }

    /// Attaches per-step detail lines
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Sets the duration for this check
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Trait for system health checks
pub trait SystemCheck {
    /// Name of the system being checked
    fn name(&self) -> &'static str;

    /// Perform the health check
    fn check(&self) -> CheckResult;

    /// Optional description of what this check validates
    fn description(&self) -> Option<&'static str> {
        None
    }
}
