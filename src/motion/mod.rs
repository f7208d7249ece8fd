//! Per-tick motion driven outside of gesture callbacks

mod inertia;

pub use inertia::Inertia;

/// Trait for anything that keeps moving between gestures
///
/// The application ticks these once per frame, after the gesture dispatcher
/// has run, so a flick received this frame starts decaying on the same frame.
pub trait Motion {
    /// Advances motion by one tick
    ///
    /// # Arguments
    /// * `delta_time` - Time elapsed since last tick in seconds
    fn tick(&mut self, delta_time: f32);

    /// Returns true while there is motion left to apply
    fn is_moving(&self) -> bool;
}
