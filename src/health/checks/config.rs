//! Configuration system health check

use crate::config::AppConfig;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that every profile loads and validates
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Creates a new config check with default profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Loads and validates gesture settings for each profile")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failures = 0;

        for profile in &self.profiles {
            match AppConfig::load(profile) {
                Ok(config) => details.push(format!(
                    "✓ Profile '{}': input {:?}, trace {} samples, flick window {} @ {}",
                    profile,
                    config.gesture.input_mode,
                    config.gesture.trace_capacity,
                    config.gesture.flick_window,
                    config.gesture.flick_threshold
                )),
                Err(e) => {
                    details.push(format!("✗ Profile '{}': {}", profile, e));
                    failures += 1;
                }
            }
        }

        let from_env = AppConfig::load_from_env();
        match &from_env {
            Ok(config) => details.push(format!("✓ Environment profile '{}'", config.profile)),
            Err(e) => details.push(format!("⚠ Environment config: {}", e)),
        }

        if failures > 0 {
            CheckResult::fail(format!("{} profile(s) failed to load", failures)).with_details(details)
        } else if from_env.is_err() {
            CheckResult::warn("Profiles loaded, environment config did not").with_details(details)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details)
        }
    }
}
