use swipe::app::App;
use swipe::config::AppConfig;
use swipe::{health, logging};
use tracing::warn;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> anyhow::Result<()> {
    let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
    logging::init(&profile);

    let config = AppConfig::load(&profile).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using default configuration");
        AppConfig::default()
    });

    if std::env::args().any(|arg| arg == "--check") {
        let report = health::run_all_checks(&config);
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
