use tracing_subscriber::EnvFilter;

/// Initialise logging.
///
/// The default level is `debug` for the debug profile and `info` otherwise;
/// `RUST_LOG` overrides either. Safe to call more than once.
pub fn init(profile: &str) {
    let level = if profile == "debug" { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
