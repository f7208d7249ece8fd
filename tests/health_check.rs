//! Integration tests for the health check system

use swipe::config::AppConfig;
use swipe::health::{self, HealthCheckRunner, SystemCheck, checks::*};

#[test]
fn test_all_health_checks() {
    let report = health::run_all_checks(&AppConfig::default());

    // Print report for debugging if tests fail
    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Health checks failed: {} failures, {} warnings",
        report.failed(),
        report.warned()
    );
}

#[test]
fn test_config_check() {
    let result = ConfigCheck::new().check();
    assert!(result.status.is_ok(), "Config check failed: {}", result.message);
}

#[test]
fn test_build_info_check() {
    let result = BuildInfoCheck::new().check();
    assert!(
        result.status.is_ok(),
        "Build info check failed: {}",
        result.message
    );
}

#[test]
fn test_pipeline_check() {
    let result = PipelineCheck::new().check();
    assert!(
        result.status.is_ok(),
        "Pipeline check failed: {}\n{}",
        result.message,
        result.details.join("\n")
    );
}

#[test]
fn test_inertia_check() {
    let result = InertiaCheck::new().check();
    assert!(result.status.is_ok(), "Inertia check failed: {}", result.message);
    assert_eq!(result.message, "Settled after 688 ticks");
}

#[test]
fn test_runner_collects_all_checks() {
    let report = HealthCheckRunner::new()
        .add_check(PipelineCheck::new())
        .add_check(InertiaCheck::new())
        .run();

    assert_eq!(report.total(), 2, "Expected 2 checks in report");
    assert_eq!(
        report.passed() + report.warned() + report.failed(),
        report.total()
    );
}

#[test]
fn test_report_exit_codes() {
    let report = HealthCheckRunner::new().add_check(InertiaCheck::new()).run();
    assert_eq!(report.exit_code(), 0);
    assert!(health::format_report(&report).contains("Inertia"));
}
