//! Raw input collection from winit events

use glam::Vec2;
use tracing::trace;
use winit::event::{ElementState, MouseButton, Touch, WindowEvent};

use super::state::{DeviceState, TouchPhase, TouchPoint};

/// Collects raw input from winit events and maintains DeviceState
pub struct InputCollector {
    state: DeviceState,
    scale_factor: f32,
}

impl InputCollector {
    /// Creates a new input collector
    pub fn new() -> Self {
        Self {
            state: DeviceState::new(),
            scale_factor: 1.0,
        }
    }

    /// Update scale factor (DPI scaling)
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    /// Handle a winit window event
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.state.pointer.position =
                    Some(self.to_logical(position.x as f32, position.y as f32));
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                // Edges queue in arrival order until advance_frame
                ElementState::Pressed => self.state.pointer.press(),
                ElementState::Released => self.state.pointer.release(),
            },

            WindowEvent::Touch(touch) => self.handle_touch(touch),

            _ => {}
        }
    }

    fn handle_touch(&mut self, touch: &Touch) {
        let position = self.to_logical(touch.location.x as f32, touch.location.y as f32);
        trace!(id = touch.id, phase = ?touch.phase, ?position, "Touch event");

        match touch.phase {
            winit::event::TouchPhase::Started => {
                self.state.touches.retain(|t| t.id != touch.id);
                self.state.touches.push(TouchPoint::new(
                    touch.id,
                    TouchPhase::Began,
                    position,
                    Vec2::ZERO,
                ));
            }
            winit::event::TouchPhase::Moved => {
                if let Some(point) = self.touch_mut(touch.id) {
                    point.delta += position - point.position;
                    point.position = position;
                    // A touch that began this frame keeps reporting Began
                    if point.phase != TouchPhase::Began {
                        point.phase = TouchPhase::Moved;
                    }
                }
            }
            winit::event::TouchPhase::Ended => {
                // Keeps `started` for a finger that lands and lifts in one frame
                if let Some(point) = self.touch_mut(touch.id) {
                    point.delta += position - point.position;
                    point.position = position;
                    point.phase = TouchPhase::Ended;
                }
            }
            winit::event::TouchPhase::Cancelled => {
                if let Some(point) = self.touch_mut(touch.id) {
                    point.phase = TouchPhase::Canceled;
                }
            }
        }
    }

    fn touch_mut(&mut self, id: u64) -> Option<&mut TouchPoint> {
        self.state.touches.iter_mut().find(|t| t.id == id)
    }

    fn to_logical(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y) / self.scale_factor
    }

    /// Advance to next frame (transitions edge states to steady states)
    pub fn advance_frame(&mut self) {
        self.state.advance_frame();
    }

    /// Get current device state
    pub fn state(&self) -> &DeviceState {
        &self.state
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}
