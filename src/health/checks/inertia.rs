//! Inertial motion health check

use glam::Vec3;

use crate::config::InertiaSettings;
use crate::gesture::{GestureInfo, GesturePhase};
use crate::health::check::{CheckResult, SystemCheck};
use crate::motion::Inertia;

/// Upper bound on ticks before a unit flick must have settled
const MAX_TICKS: usize = 100_000;

/// Checks that a flick decays monotonically and eventually stops
pub struct InertiaCheck {
    settings: InertiaSettings,
}

impl InertiaCheck {
    pub fn new() -> Self {
        Self {
            settings: InertiaSettings::default(),
        }
    }

    pub fn with_settings(settings: InertiaSettings) -> Self {
        Self { settings }
    }
}

impl Default for InertiaCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for InertiaCheck {
    fn name(&self) -> &'static str {
        "Inertia"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates flick decay and settling")
    }

    fn check(&self) -> CheckResult {
        let mut inertia = Inertia::new(self.settings);
        inertia.launch(&GestureInfo {
            screen_position: Vec3::ZERO,
            delta_position: Vec3::ZERO,
            phase: GesturePhase::Up,
            elapsed_time: 0.25,
            drag_distance: Vec3::new(1.0, 0.0, 0.0),
        });

        let mut previous = inertia.direction().length();
        let mut ticks = 0;
        while inertia.step(1.0 / 60.0).is_some() {
            let current = inertia.direction().length();
            if current >= previous {
                return CheckResult::fail("Flick magnitude did not decrease")
                    .with_details(vec![format!("tick {}: {} -> {}", ticks, previous, current)]);
            }
            previous = current;
            ticks += 1;
            if ticks > MAX_TICKS {
                return CheckResult::fail("Flick never settled");
            }
        }

        CheckResult::pass(format!("Settled after {} ticks", ticks)).with_details(vec![format!(
            "decay {}, epsilon {}, scale {}",
            self.settings.decay, self.settings.epsilon, self.settings.scale
        )])
    }
}
