//! Screen to world mapping for pan handlers

use glam::Vec3;

use crate::config::CameraSettings;

/// Maps a screen-space delta to a world-space delta
pub trait ScreenProjection {
    fn screen_to_world(&self, screen_delta: Vec3) -> Vec3;
}

/// Projection onto the ground plane for a top-down perspective camera
///
/// One screen pixel covers a fixed slice of the ground at the focus distance.
/// The result is negated so the ground follows the pointer: dragging right
/// moves the camera left. Screen y grows downward and maps to world z.
#[derive(Debug, Clone, Copy)]
pub struct GroundProjection {
    focus_distance: f32,
    fov_y: f32,
    viewport_height: f32,
}

impl GroundProjection {
    /// Creates a projection for a viewport `viewport_height` logical pixels tall
    pub fn new(settings: &CameraSettings, viewport_height: f32) -> Self {
        Self {
            focus_distance: settings.focus_distance,
            fov_y: settings.fov_y_degrees.to_radians(),
            viewport_height: viewport_height.max(1.0),
        }
    }

    /// Update after the window was resized
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height.max(1.0);
    }

    /// World units covered by one screen pixel at the focus distance
    pub fn units_per_pixel(&self) -> f32 {
        2.0 * self.focus_distance * (self.fov_y / 2.0).tan() / self.viewport_height
    }
}

impl ScreenProjection for GroundProjection {
    fn screen_to_world(&self, screen_delta: Vec3) -> Vec3 {
        let k = self.units_per_pixel();
        Vec3::new(-screen_delta.x * k, 0.0, -screen_delta.y * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection() -> GroundProjection {
        // 90 degree fov: the viewport spans 2 * focus_distance world units
        let settings = CameraSettings {
            focus_distance: 10.0,
            fov_y_degrees: 90.0,
        };
        GroundProjection::new(&settings, 200.0)
    }

    #[test]
    fn test_units_per_pixel() {
        assert!((projection().units_per_pixel() - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_drag_maps_to_ground_plane() {
        let world = projection().screen_to_world(Vec3::new(10.0, 20.0, 0.0));
        assert!((world.x + 1.0).abs() < 1e-5);
        assert_eq!(world.y, 0.0);
        assert!((world.z + 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_height_viewport_is_clamped() {
        let mut projection = projection();
        projection.set_viewport_height(0.0);
        assert!(projection.units_per_pixel().is_finite());
    }
}
