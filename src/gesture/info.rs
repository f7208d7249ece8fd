//! Per-tick gesture snapshot handed to handlers

use glam::Vec3;

use crate::input::PointerSample;

/// Which edge of a gesture this tick represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Pointer pressed / touch began
    Down,
    /// Pointer held / touch moved or stationary
    Drag,
    /// Pointer released / touch ended or canceled
    Up,
}

/// Snapshot of the pointer for a single tick
///
/// Built fresh by the dispatcher every tick and passed to handlers by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureInfo {
    /// Pointer position in screen space (z is always zero)
    pub screen_position: Vec3,
    /// Movement since the previous tick
    pub delta_position: Vec3,
    pub phase: GesturePhase,
    /// Seconds covered by the trace window
    pub elapsed_time: f32,
    /// Displacement across the trace window, oldest to newest
    pub drag_distance: Vec3,
}

impl GestureInfo {
    /// Snapshot with no trace-derived data yet
    pub fn from_sample(sample: PointerSample) -> Self {
        Self {
            screen_position: sample.position,
            delta_position: sample.delta,
            phase: sample.phase,
            elapsed_time: 0.0,
            drag_distance: Vec3::ZERO,
        }
    }

    /// Returns a copy carrying trace-derived fields
    pub fn with_trace(self, elapsed_time: f32, drag_distance: Vec3) -> Self {
        Self {
            elapsed_time,
            drag_distance,
            ..self
        }
    }

    pub fn is_down(&self) -> bool {
        self.phase == GesturePhase::Down
    }

    pub fn is_drag(&self) -> bool {
        self.phase == GesturePhase::Drag
    }

    pub fn is_up(&self) -> bool {
        self.phase == GesturePhase::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_follow_phase() {
        let info = GestureInfo::from_sample(PointerSample {
            position: Vec3::new(1.0, 2.0, 0.0),
            delta: Vec3::ZERO,
            phase: GesturePhase::Drag,
        });

        assert!(info.is_drag());
        assert!(!info.is_down());
        assert!(!info.is_up());
        assert_eq!(info.elapsed_time, 0.0);
        assert_eq!(info.drag_distance, Vec3::ZERO);
    }

    #[test]
    fn test_with_trace_keeps_pointer_fields() {
        let info = GestureInfo::from_sample(PointerSample {
            position: Vec3::new(5.0, 5.0, 0.0),
            delta: Vec3::new(1.0, 0.0, 0.0),
            phase: GesturePhase::Up,
        })
        .with_trace(0.25, Vec3::new(10.0, 0.0, 0.0));

        assert_eq!(info.screen_position, Vec3::new(5.0, 5.0, 0.0));
        assert_eq!(info.delta_position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(info.elapsed_time, 0.25);
        assert_eq!(info.drag_distance, Vec3::new(10.0, 0.0, 0.0));
    }
}
