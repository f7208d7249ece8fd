//! Build information health check

use crate::build_info;
use crate::health::check::{CheckResult, SystemCheck};

/// Reports build metadata; warns when git information is missing
pub struct BuildInfoCheck;

impl BuildInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BuildInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates build metadata (git, rustc, timestamps)")
    }

    fn check(&self) -> CheckResult {
        let details = vec![
            format!("Version: {}", build_info::version_string()),
            format!(
                "Git: {}@{}{}",
                build_info::GIT_BRANCH,
                build_info::git_sha_short(),
                if build_info::is_git_dirty() { " (dirty)" } else { "" }
            ),
            format!("Build time: {}", build_info::BUILD_TIMESTAMP),
            format!(
                "Rustc: {} ({})",
                build_info::RUSTC_SEMVER,
                build_info::RUSTC_CHANNEL
            ),
        ];

        CheckResult::pass("Build metadata accessible").with_details(details)
    }
}
