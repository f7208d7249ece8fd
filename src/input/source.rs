//! Input strategy selection

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::pointer::PointerSource;
use super::state::DeviceState;
use super::touch::TouchSource;
use crate::gesture::GesturePhase;

/// One pointer reading turned into a gesture edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Screen position (z is always zero)
    pub position: Vec3,
    /// Movement since the previous reading
    pub delta: Vec3,
    pub phase: GesturePhase,
}

/// Reads device state and reports the gesture edges of a frame
pub trait InputSource {
    /// Name of this source for debugging
    fn name(&self) -> &str;

    /// Samples the device for this frame
    ///
    /// Samples come back in the order they happened, so a press and release
    /// within one frame yield a down followed by an up. An empty list means
    /// nothing happened and the dispatcher skips the tick entirely.
    fn sample(&mut self, device: &DeviceState) -> Vec<PointerSample>;
}

/// Which input strategy to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Touch on mobile targets, pointer everywhere else
    #[default]
    Auto,
    Pointer,
    Touch,
}

impl InputMode {
    /// Resolves `Auto` against the compile target
    pub fn resolve(self) -> Self {
        match self {
            Self::Auto if is_touch_platform() => Self::Touch,
            Self::Auto => Self::Pointer,
            mode => mode,
        }
    }
}

/// Returns true on Android/iOS targets
pub fn is_touch_platform() -> bool {
    cfg!(any(target_os = "android", target_os = "ios"))
}

/// Builds the input source for `mode`
pub fn select_source(mode: InputMode) -> Box<dyn InputSource> {
    let resolved = mode.resolve();
    info!(requested = ?mode, ?resolved, "Selected input source");

    match resolved {
        InputMode::Touch => Box::new(TouchSource::new()),
        InputMode::Pointer | InputMode::Auto => Box::new(PointerSource::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_resolve_to_themselves() {
        assert_eq!(InputMode::Pointer.resolve(), InputMode::Pointer);
        assert_eq!(InputMode::Touch.resolve(), InputMode::Touch);
    }

    #[test]
    fn test_auto_resolves_by_platform() {
        let expected = if is_touch_platform() {
            InputMode::Touch
        } else {
            InputMode::Pointer
        };
        assert_eq!(InputMode::Auto.resolve(), expected);
    }

    #[test]
    fn test_select_source_names() {
        assert_eq!(select_source(InputMode::Pointer).name(), "pointer");
        assert_eq!(select_source(InputMode::Touch).name(), "touch");
    }
}
