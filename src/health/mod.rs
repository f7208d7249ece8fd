//! Startup health checks
//!
//! Useful for:
//! - Validating configuration before opening a window
//! - CI smoke tests of the gesture pipeline
//! - Debugging misbehaving flick or inertia settings
//!
//! # Example
//!
//! ```no_run
//! use swipe::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(ConfigCheck::new())
//!     .add_check(PipelineCheck::new())
//!     .run();
//!
//! if report.is_healthy() {
//!     println!("All systems operational!");
//! }
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

use crate::config::AppConfig;

/// Runs all default health checks against `config` and returns a report
pub fn run_all_checks(config: &AppConfig) -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::BuildInfoCheck::new())
        .add_check(checks::PipelineCheck::with_settings(config.gesture.clone()))
        .add_check(checks::InertiaCheck::with_settings(config.inertia))
        .run()
}
