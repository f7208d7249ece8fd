//! Mouse / pen input strategy

use glam::Vec3;

use super::source::{InputSource, PointerSample};
use super::state::{ButtonEdge, DeviceState};
use crate::gesture::GesturePhase;

/// Turns primary-button edges into gesture samples
///
/// Each press edge reports a down with zero delta and each release edge an
/// up, in the order they arrived. A frame with no edges and the button held
/// reports a drag. Deltas are measured against the last position this source
/// reported.
#[derive(Debug, Default)]
pub struct PointerSource {
    last_position: Vec3,
}

impl PointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    fn moved_to(&mut self, position: Vec3, phase: GesturePhase) -> PointerSample {
        let delta = position - self.last_position;
        self.last_position = position;
        PointerSample {
            position,
            delta,
            phase,
        }
    }
}

impl InputSource for PointerSource {
    fn name(&self) -> &str {
        "pointer"
    }

    fn sample(&mut self, device: &DeviceState) -> Vec<PointerSample> {
        let pointer = &device.pointer;
        let current = pointer
            .position
            .map(|pos| pos.extend(0.0))
            .unwrap_or(self.last_position);

        if pointer.edges.is_empty() {
            return if pointer.primary.is_down() {
                vec![self.moved_to(current, GesturePhase::Drag)]
            } else {
                Vec::new()
            };
        }

        pointer
            .edges
            .iter()
            .map(|edge| {
                let position = edge.position.map_or(current, |pos| pos.extend(0.0));
                match edge.edge {
                    ButtonEdge::Pressed => {
                        self.last_position = position;
                        PointerSample {
                            position,
                            delta: Vec3::ZERO,
                            phase: GesturePhase::Down,
                        }
                    }
                    ButtonEdge::Released => self.moved_to(position, GesturePhase::Up),
                }
            })
            .collect()
    }
}
