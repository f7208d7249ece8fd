//! Decaying post-flick motion

use glam::Vec3;
use tracing::trace;

use crate::config::InertiaSettings;
use crate::gesture::GestureInfo;

/// Momentum left over after a flick
///
/// Stores the flick's drag distance and the time it took. Each step hands out
/// a slice of that distance proportional to the frame time, then shrinks the
/// stored vector by a constant factor until it is negligible.
#[derive(Debug, Clone)]
pub struct Inertia {
    direction: Vec3,
    flick_elapsed: f32,
    settings: InertiaSettings,
}

impl Inertia {
    pub fn new(settings: InertiaSettings) -> Self {
        Self {
            direction: Vec3::ZERO,
            flick_elapsed: 0.0,
            settings,
        }
    }

    /// Starts motion from a flick snapshot
    pub fn launch(&mut self, info: &GestureInfo) {
        self.direction = info.drag_distance;
        self.flick_elapsed = info.elapsed_time;
        trace!(direction = ?self.direction, elapsed = self.flick_elapsed, "Inertia launched");
    }

    /// Cancels any motion in flight
    pub fn stop(&mut self) {
        self.direction = Vec3::ZERO;
    }

    /// Advances one tick and returns this tick's displacement
    ///
    /// Returns `None` once the stored vector is at or below epsilon.
    pub fn step(&mut self, delta_time: f32) -> Option<Vec3> {
        if !self.is_moving() {
            return None;
        }
        // A flick with no recorded time has no speed to carry
        if self.flick_elapsed <= 0.0 {
            self.stop();
            return None;
        }

        let displacement = self.direction * (delta_time / self.flick_elapsed) * self.settings.scale;
        self.direction *= self.settings.decay;

        Some(displacement)
    }

    /// Whether the stored vector is still above epsilon
    pub fn is_moving(&self) -> bool {
        self.direction.length() > self.settings.epsilon
    }

    /// Remaining stored flick vector
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn settings(&self) -> &InertiaSettings {
        &self.settings
    }
}

impl Default for Inertia {
    fn default() -> Self {
        Self::new(InertiaSettings::default())
    }
}
