//! Player kicks driven by swipes

use glam::Vec2;

use crate::config::InertiaSettings;
use crate::gesture::{GestureHandler, GestureInfo};
use crate::motion::{Inertia, Motion};

/// Turns swipes into forces for a physics-driven player
///
/// Releasing a swipe queues the swipe vector as a kick; a flick also leaves a
/// decaying push behind. Forces are collected by the physics step through
/// [`PlayerFlickHandler::fixed_update`].
pub struct PlayerFlickHandler {
    speed: f32,
    movement: Vec2,
    inertia: Inertia,
    priority: i32,
}

impl PlayerFlickHandler {
    pub const DEFAULT_PRIORITY: i32 = 9999;

    pub fn new(speed: f32, inertia: InertiaSettings) -> Self {
        Self {
            speed,
            movement: Vec2::ZERO,
            inertia: Inertia::new(inertia),
            priority: Self::DEFAULT_PRIORITY,
        }
    }

    /// Builder method to set the dispatch priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Movement queued for the next physics step
    pub fn pending_movement(&self) -> Vec2 {
        self.movement
    }

    /// Returns the force to apply this physics step and clears the queue
    pub fn fixed_update(&mut self) -> Vec2 {
        let force = self.movement * self.speed;
        self.movement = Vec2::ZERO;
        force
    }
}

impl GestureHandler for PlayerFlickHandler {
    fn name(&self) -> &str {
        "player"
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

    fn on_up(&mut self, info: GestureInfo) {
        self.movement = info.drag_distance.truncate();
    }

    fn on_flick(&mut self, info: GestureInfo) {
        self.inertia.launch(&info);
    }
}

impl Motion for PlayerFlickHandler {
    fn tick(&mut self, delta_time: f32) {
        if let Some(displacement) = self.inertia.step(delta_time) {
            self.movement += displacement.truncate();
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
    use glam::Vec3;

    fn released(distance: Vec3, elapsed: f32) -> GestureInfo {
        GestureInfo {
            screen_position: Vec3::ZERO,
            delta_position: Vec3::ZERO,
            phase: GesturePhase::Up,
            elapsed_time: elapsed,
            drag_distance: distance,
        }
    }

    #[test]
    fn test_release_queues_kick() {
        let mut player = PlayerFlickHandler::new(2.0, InertiaSettings::default());
        player.on_up(released(Vec3::new(3.0, -4.0, 0.0), 0.2));

        assert_eq!(player.pending_movement(), Vec2::new(3.0, -4.0));
        assert_eq!(player.fixed_update(), Vec2::new(6.0, -8.0));
        assert_eq!(player.fixed_update(), Vec2::ZERO);
    }

    #[test]
    fn test_flick_adds_decaying_push() {
        let mut player = PlayerFlickHandler::new(1.0, InertiaSettings::default());
        let info = released(Vec3::new(10.0, 0.0, 0.0), 0.1);
        player.on_up(info);
        player.on_flick(info);

        player.tick(0.01);
        let force = player.fixed_update();
        assert!((force.x - 11.0).abs() < 1e-4);

        player.tick(0.01);
        let force = player.fixed_update();
        assert!((force.x - 0.99).abs() < 1e-4);
    }

    #[test]
    fn test_down_stops_push() {
        let mut player = PlayerFlickHandler::new(1.0, InertiaSettings::default());
        player.on_flick(released(Vec3::new(10.0, 0.0, 0.0), 0.1));
        player.on_down(released(Vec3::ZERO, 0.0));

        assert!(!player.is_moving());
        player.tick(0.01);
        assert_eq!(player.fixed_update(), Vec2::ZERO);
    }
}
