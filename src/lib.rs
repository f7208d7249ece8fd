//! Swipe
//!
//! Pointer gesture recognition: turns mouse or single-finger touch input into
//! down/drag/up/flick events, routes them to a single owning handler and
//! drives inertial motion after flicks.

/// Demo application - windowing and input plumbing
pub mod app;

/// Build-time information (git SHA, branch, timestamp, etc.)
pub mod build_info;

/// Profile-based configuration
pub mod config;

pub mod error;

/// Gesture recognition, ownership and dispatch
pub mod gesture;

/// Gesture consumers (camera pan, player kicks)
pub mod handlers;

/// Startup health checks
pub mod health;

/// Raw input collection and input strategies
pub mod input;

pub mod logging;

/// Post-flick inertial motion
pub mod motion;

pub use error::SwipeError;
