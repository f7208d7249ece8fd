//! Single-finger touch input strategy

use tracing::trace;

use super::source::{InputSource, PointerSample};
use super::state::{DeviceState, TouchPhase, TouchPoint};
use crate::gesture::GesturePhase;

/// Follows one finger across frames and ignores every other touch
///
/// A new finger is only adopted when the touch in the first slot landed this
/// frame. The adopted id is released when that finger lifts or is canceled.
/// A finger that lands and lifts within one frame reports a down and an up.
#[derive(Debug, Default)]
pub struct TouchSource {
    tracked: Option<u64>,
}

impl TouchSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finger id currently followed, if any
    pub fn tracked_id(&self) -> Option<u64> {
        self.tracked
    }

    fn current_touch(&mut self, device: &DeviceState) -> Option<TouchPoint> {
        if let Some(id) = self.tracked
            && let Some(touch) = device.touch(id)
        {
            return Some(*touch);
        }

        let first = device.touches.first()?;
        if first.started {
            trace!(id = first.id, "Tracking new touch");
            self.tracked = Some(first.id);
            return Some(*first);
        }
        None
    }
}

impl InputSource for TouchSource {
    fn name(&self) -> &str {
        "touch"
    }

    fn sample(&mut self, device: &DeviceState) -> Vec<PointerSample> {
        let Some(touch) = self.current_touch(device) else {
            return Vec::new();
        };

        let sample = |phase| PointerSample {
            position: touch.position.extend(0.0),
            delta: touch.delta.extend(0.0),
            phase,
        };

        let mut samples = Vec::with_capacity(2);
        if touch.started {
            samples.push(sample(GesturePhase::Down));
        }
        match touch.phase {
            TouchPhase::Began => {}
            TouchPhase::Moved | TouchPhase::Stationary => {
                if !touch.started {
                    samples.push(sample(GesturePhase::Drag));
                }
            }
            TouchPhase::Ended | TouchPhase::Canceled => {
                self.tracked = None;
                samples.push(sample(GesturePhase::Up));
            }
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    fn touch(id: u64, phase: TouchPhase, x: f32, dx: f32) -> TouchPoint {
        TouchPoint::new(id, phase, Vec2::new(x, 0.0), Vec2::new(dx, 0.0))
    }

    fn phases(samples: &[PointerSample]) -> Vec<GesturePhase> {
        samples.iter().map(|s| s.phase).collect()
    }

    fn device(touches: Vec<TouchPoint>) -> DeviceState {
        DeviceState {
            touches,
            ..DeviceState::default()
        }
    }

    #[test]
    fn test_no_touches_reports_nothing() {
        let mut source = TouchSource::new();
        assert!(source.sample(&device(vec![])).is_empty());
    }

    #[test]
    fn test_began_moved_ended_sequence() {
        let mut source = TouchSource::new();

        let down = source.sample(&device(vec![touch(7, TouchPhase::Began, 0.0, 0.0)]));
        assert_eq!(phases(&down), vec![GesturePhase::Down]);
        assert_eq!(source.tracked_id(), Some(7));

        let drag = source.sample(&device(vec![touch(7, TouchPhase::Moved, 5.0, 5.0)]));
        assert_eq!(phases(&drag), vec![GesturePhase::Drag]);
        assert_eq!(drag[0].delta, Vec3::new(5.0, 0.0, 0.0));

        let still = source.sample(&device(vec![touch(7, TouchPhase::Stationary, 5.0, 0.0)]));
        assert_eq!(phases(&still), vec![GesturePhase::Drag]);

        let up = source.sample(&device(vec![touch(7, TouchPhase::Ended, 6.0, 1.0)]));
        assert_eq!(phases(&up), vec![GesturePhase::Up]);
        assert_eq!(source.tracked_id(), None);
    }

    #[test]
    fn test_canceled_touch_releases_id() {
        let mut source = TouchSource::new();
        source.sample(&device(vec![touch(1, TouchPhase::Began, 0.0, 0.0)]));

        let up = source.sample(&device(vec![touch(1, TouchPhase::Canceled, 0.0, 0.0)]));
        assert_eq!(phases(&up), vec![GesturePhase::Up]);
        assert_eq!(source.tracked_id(), None);
    }

    #[test]
    fn test_second_finger_is_ignored() {
        let mut source = TouchSource::new();
        source.sample(&device(vec![touch(1, TouchPhase::Began, 0.0, 0.0)]));

        let sample = source.sample(&device(vec![
            touch(1, TouchPhase::Stationary, 0.0, 0.0),
            touch(2, TouchPhase::Began, 50.0, 0.0),
        ]));

        assert_eq!(phases(&sample), vec![GesturePhase::Drag]);
        assert_eq!(source.tracked_id(), Some(1));
    }

    #[test]
    fn test_tracked_finger_found_outside_first_slot() {
        let mut source = TouchSource::new();
        source.sample(&device(vec![touch(3, TouchPhase::Began, 0.0, 0.0)]));

        let sample = source.sample(&device(vec![
            touch(9, TouchPhase::Stationary, 80.0, 0.0),
            touch(3, TouchPhase::Moved, 4.0, 4.0),
        ]));

        assert_eq!(sample[0].position, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_non_began_first_touch_is_not_adopted() {
        let mut source = TouchSource::new();
        let sample = source.sample(&device(vec![touch(4, TouchPhase::Moved, 10.0, 1.0)]));

        assert!(sample.is_empty());
        assert_eq!(source.tracked_id(), None);
    }

    #[test]
    fn test_tap_within_one_frame_reports_down_then_up() {
        let mut source = TouchSource::new();
        let mut tap = touch(5, TouchPhase::Ended, 12.0, 0.0);
        tap.started = true;

        let samples = source.sample(&device(vec![tap]));

        assert_eq!(phases(&samples), vec![GesturePhase::Down, GesturePhase::Up]);
        assert_eq!(samples[1].position, Vec3::new(12.0, 0.0, 0.0));
        assert_eq!(source.tracked_id(), None);
    }
}
