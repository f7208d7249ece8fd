//! Gesture pipeline health check

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::config::GestureSettings;
use crate::gesture::{GestureDispatcher, GestureHandler, GestureInfo, SharedHandler};
use crate::health::check::{CheckResult, SystemCheck};
use crate::input::{ButtonEdge, DeviceState, PointerSource};

/// Counts callbacks from a scripted gesture
#[derive(Default)]
struct Tally {
    drags: usize,
    ups: usize,
    flicks: usize,
}

impl GestureHandler for Tally {
    fn name(&self) -> &str {
        "tally"
    }

    fn priority(&self) -> i32 {
        0
    }

    fn wants_gesture(&self, _info: &GestureInfo) -> bool {
        true
    }

    fn on_down(&mut self, _info: GestureInfo) {}

    fn on_up(&mut self, _info: GestureInfo) {
        self.ups += 1;
    }

    fn on_drag(&mut self, _info: GestureInfo) {
        self.drags += 1;
    }

    fn on_flick(&mut self, _info: GestureInfo) {
        self.flicks += 1;
    }
}

/// Replays scripted mouse swipes through a real dispatcher
pub struct PipelineCheck {
    settings: GestureSettings,
}

impl PipelineCheck {
    pub fn new() -> Self {
        Self {
            settings: GestureSettings::default(),
        }
    }

    pub fn with_settings(settings: GestureSettings) -> Self {
        Self { settings }
    }

    /// Runs press, one drag per x, release; returns the tally's counters
    fn swipe(&self, xs: &[f32]) -> Tally {
        let tally = Rc::new(RefCell::new(Tally::default()));
        let shared: SharedHandler = tally.clone();

        let mut dispatcher =
            GestureDispatcher::new(Box::new(PointerSource::new()), self.settings.clone());
        dispatcher.register(&shared);

        let mut device = DeviceState::new();
        let mut frame = |x: f32, edge: Option<ButtonEdge>| {
            device.pointer.position = Some(Vec2::new(x, 0.0));
            match edge {
                Some(ButtonEdge::Pressed) => device.pointer.press(),
                Some(ButtonEdge::Released) => device.pointer.release(),
                None => {}
            }
            dispatcher.tick(&device, 1.0 / 60.0);
            device.advance_frame();
        };

        frame(0.0, Some(ButtonEdge::Pressed));
        for &x in xs {
            frame(x, None);
        }
        frame(xs.last().copied().unwrap_or(0.0), Some(ButtonEdge::Released));

        drop(shared);
        tally.take()
    }
}

impl Default for PipelineCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for PipelineCheck {
    fn name(&self) -> &'static str {
        "Gesture Pipeline"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Replays a straight and a reversed swipe through the dispatcher")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut ok = true;

        let straight: Vec<f32> = (1..=20).map(|i| i as f32 * 8.0).collect();
        let tally = self.swipe(&straight);
        if tally.drags == straight.len() && tally.ups == 1 && tally.flicks == 1 {
            details.push(format!("✓ Straight swipe: {} drags, flick", tally.drags));
        } else {
            details.push(format!(
                "✗ Straight swipe: {} drags, {} ups, {} flicks",
                tally.drags, tally.ups, tally.flicks
            ));
            ok = false;
        }

        let mut reversed: Vec<f32> = (1..=15).map(|i| i as f32 * 8.0).collect();
        reversed.extend((1..=5).map(|i| 120.0 - i as f32 * 8.0));
        let tally = self.swipe(&reversed);
        if tally.ups == 1 && tally.flicks == 0 {
            details.push("✓ Reversed swipe: no flick".to_string());
        } else {
            details.push(format!("✗ Reversed swipe: {} flicks", tally.flicks));
            ok = false;
        }

        if ok {
            CheckResult::pass("Flick detection working").with_details(details)
        } else {
            CheckResult::fail("Flick detection misbehaved").with_details(details)
        }
    }
}
