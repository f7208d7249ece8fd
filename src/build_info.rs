//! Build-time information
//!
//! Build metadata captured at compile time by `build.rs`. Git fields fall back
//! to "unknown" when the crate is built outside a git checkout.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu, aarch64-linux-android)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.88.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Git branch the binary was built from
pub const GIT_BRANCH: &str = match option_env!("VERGEN_GIT_BRANCH") {
    Some(branch) => branch,
    None => "unknown",
};

/// Full git commit SHA
pub const GIT_SHA: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

const GIT_DIRTY: &str = match option_env!("VERGEN_GIT_DIRTY") {
    Some(dirty) => dirty,
    None => "false",
};

/// First 7 characters of the commit SHA
pub fn git_sha_short() -> &'static str {
    GIT_SHA.get(..7).unwrap_or(GIT_SHA)
}

/// Whether the working tree had uncommitted changes at build time
pub fn is_git_dirty() -> bool {
    GIT_DIRTY == "true"
}

/// Returns a formatted build version string
///
/// Format: `{package_version}+{target_triple}-opt{opt_level}`
pub fn version_string() -> String {
    format!(
        "{}+{}-opt{}",
        env!("CARGO_PKG_VERSION"),
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sha_is_prefix() {
        assert!(GIT_SHA.starts_with(git_sha_short()));
        assert!(git_sha_short().len() <= 7);
    }

    #[test]
    fn test_version_string_contains_target() {
        assert!(version_string().contains(CARGO_TARGET_TRIPLE));
    }
}
