//! Demo application module
//!
//! Handles windowing and feeds raw input into the gesture system.

mod runner;
mod window;

pub use runner::App;
pub use window::window_attributes_from_config;
