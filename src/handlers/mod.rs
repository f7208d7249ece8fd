//! Gesture consumers

mod camera;
mod player;
mod projection;

pub use camera::{Camera, CameraPanHandler};
pub use player::PlayerFlickHandler;
pub use projection::{GroundProjection, ScreenProjection};
