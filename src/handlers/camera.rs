//! Camera panning driven by drags and flicks

use glam::Vec3;
use tracing::debug;

use super::projection::ScreenProjection;
use crate::config::InertiaSettings;
use crate::gesture::{GestureHandler, GestureInfo};
use crate::motion::{Inertia, Motion};

/// Camera hovering over the ground plane
#[derive(Debug, Clone)]
pub struct Camera {
    /// World position of the camera
    pub position: Vec3,
}

impl Camera {
    /// Create camera at a world position
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Pan the camera across the ground plane
    ///
    /// Height is left untouched; only x and z of `delta` are applied.
    pub fn pan(&mut self, delta: Vec3) {
        self.position.x += delta.x;
        self.position.z += delta.z;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// Pans a camera while dragging and keeps it gliding after a flick
///
/// Accepts every gesture, so it is registered with the lowest precedence and
/// acts as the fallback handler.
pub struct CameraPanHandler {
    camera: Camera,
    projection: Box<dyn ScreenProjection>,
    inertia: Inertia,
    priority: i32,
}

impl CameraPanHandler {
    /// Priority used when none is given
    pub const DEFAULT_PRIORITY: i32 = 9999;

    pub fn new(
        camera: Camera,
        projection: Box<dyn ScreenProjection>,
        inertia: InertiaSettings,
    ) -> Self {
        Self {
            camera,
            projection,
            inertia: Inertia::new(inertia),
            priority: Self::DEFAULT_PRIORITY,
        }
    }

    /// Builder method to set the dispatch priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn inertia(&self) -> &Inertia {
        &self.inertia
    }

    /// Replace the projection, e.g. after the viewport was resized
    pub fn set_projection(&mut self, projection: Box<dyn ScreenProjection>) {
        self.projection = projection;
    }

    fn move_by_screen(&mut self, screen_delta: Vec3) {
        let world = self.projection.screen_to_world(screen_delta);
        self.camera.pan(world);
    }
}

impl GestureHandler for CameraPanHandler {
    fn name(&self) -> &str {
        "camera"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn wants_gesture(&self, _info: &GestureInfo) -> bool {
        true
    }

    fn on_down(&mut self, _info: GestureInfo) {
        self.inertia.stop();
    }

    fn on_drag(&mut self, info: GestureInfo) {
        self.move_by_screen(info.delta_position);
    }

    fn on_flick(&mut self, info: GestureInfo) {
        debug!(distance = ?info.drag_distance, "Camera auto-scroll started");
        self.inertia.launch(&info);
    }
}

impl Motion for CameraPanHandler {
    fn tick(&mut self, delta_time: f32) {
        if let Some(displacement) = self.inertia.step(delta_time) {
            self.move_by_screen(displacement);
        }
    }

    fn is_moving(&self) -> bool {
        self.inertia.is_moving()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GesturePhase;

    /// One screen pixel per world unit, no flipping
    struct Identity;

    impl ScreenProjection for Identity {
        fn screen_to_world(&self, screen_delta: Vec3) -> Vec3 {
            Vec3::new(screen_delta.x, 0.0, screen_delta.y)
        }
    }

    fn handler() -> CameraPanHandler {
        CameraPanHandler::new(
            Camera::new(Vec3::new(0.0, 10.0, 0.0)),
            Box::new(Identity),
            InertiaSettings::default(),
        )
    }

    fn info(phase: GesturePhase, delta: Vec3, distance: Vec3, elapsed: f32) -> GestureInfo {
        GestureInfo {
            screen_position: Vec3::ZERO,
            delta_position: delta,
            phase,
            elapsed_time: elapsed,
            drag_distance: distance,
        }
    }

    #[test]
    fn test_camera_pan_keeps_height() {
        let mut camera = Camera::new(Vec3::new(1.0, 5.0, 1.0));
        camera.pan(Vec3::new(2.0, 100.0, -3.0));
        assert_eq!(camera.position, Vec3::new(3.0, 5.0, -2.0));
    }

    #[test]
    fn test_drag_pans_by_delta() {
        let mut handler = handler();
        handler.on_drag(info(GesturePhase::Drag, Vec3::new(4.0, 2.0, 0.0), Vec3::ZERO, 0.0));
        assert_eq!(handler.camera().position, Vec3::new(4.0, 10.0, 2.0));
    }

    #[test]
    fn test_flick_glides_then_stops() {
        let mut handler = handler();
        handler.on_flick(info(
            GesturePhase::Up,
            Vec3::ZERO,
            Vec3::new(10.0, 0.0, 0.0),
            0.1,
        ));
        assert!(handler.is_moving());

        handler.tick(0.01);
        assert!((handler.camera().position.x - 1.0).abs() < 1e-5);

        for _ in 0..2000 {
            handler.tick(0.01);
        }
        assert!(!handler.is_moving());

        let settled = handler.camera().position;
        handler.tick(0.01);
        assert_eq!(handler.camera().position, settled);
    }

    #[test]
    fn test_down_cancels_glide() {
        let mut handler = handler();
        handler.on_flick(info(
            GesturePhase::Up,
            Vec3::ZERO,
            Vec3::new(10.0, 0.0, 0.0),
            0.1,
        ));
        handler.on_down(info(GesturePhase::Down, Vec3::ZERO, Vec3::ZERO, 0.0));

        assert!(!handler.is_moving());
        handler.tick(0.01);
        assert_eq!(handler.camera().position, Vec3::new(0.0, 10.0, 0.0));
    }
}
