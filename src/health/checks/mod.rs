//! Built-in health checks for core systems

pub mod build_info;
pub mod config;
pub mod inertia;
pub mod pipeline;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use inertia::InertiaCheck;
pub use pipeline::PipelineCheck;
