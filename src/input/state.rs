//! Raw device state

use glam::Vec2;

/// Raw device state snapshot for a single frame
#[derive(Debug, Clone, Default)]
pub struct DeviceState {
    pub pointer: PointerState,
    /// Active touches in arrival order
    pub touches: Vec<TouchPoint>,
}

/// Mouse / pen pointer state
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// DPI-scaled logical coordinates (screen space)
    pub position: Option<Vec2>,
    /// Primary button state at the end of the frame
    pub primary: ButtonState,
    /// Primary button edges seen this frame, oldest first
    pub edges: Vec<PointerEdge>,
}

/// Direction of a button transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    Pressed,
    Released,
}

/// One primary button transition and where the pointer was when it happened
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEdge {
    pub edge: ButtonEdge,
    pub position: Option<Vec2>,
}

impl PointerState {
    /// Records a primary button press at the current position
    pub fn press(&mut self) {
        self.record(ButtonEdge::Pressed, ButtonState::JustPressed);
    }

    /// Records a primary button release at the current position
    pub fn release(&mut self) {
        self.record(ButtonEdge::Released, ButtonState::JustReleased);
    }

    fn record(&mut self, edge: ButtonEdge, state: ButtonState) {
        self.primary = state;
        self.edges.push(PointerEdge {
            edge,
            position: self.position,
        });
    }
}

/// Button press state with edge detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    /// Pressed this frame (edge)
    JustPressed,
    /// Held down (multiple frames)
    Pressed,
    /// Released this frame (edge)
    JustReleased,
}

impl ButtonState {
    /// Advance state for next frame (transitions edges to steady states)
    pub fn advance(self) -> Self {
        match self {
            Self::JustPressed => Self::Pressed,
            Self::JustReleased => Self::Released,
            state => state,
        }
    }

    /// Returns true if button is currently down (just pressed or held)
    pub fn is_down(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }
}

/// Lifecycle of a single touch point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger landed this frame
    Began,
    /// Finger moved this frame
    Moved,
    /// Finger is down but did not move this frame
    Stationary,
    /// Finger lifted this frame
    Ended,
    /// System canceled the touch this frame
    Canceled,
}

impl TouchPhase {
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Ended | Self::Canceled)
    }
}

/// One finger on the touch surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub phase: TouchPhase,
    /// DPI-scaled logical coordinates (screen space)
    pub position: Vec2,
    /// Movement accumulated this frame
    pub delta: Vec2,
    /// Landed this frame; stays set if the finger also lifted this frame
    pub started: bool,
}

impl TouchPoint {
    /// Touch record whose `started` flag follows `phase`
    pub fn new(id: u64, phase: TouchPhase, position: Vec2, delta: Vec2) -> Self {
        Self {
            id,
            phase,
            position,
            delta,
            started: phase == TouchPhase::Began,
        }
    }
}

impl DeviceState {
    /// Creates a new empty device state
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all edge states for next frame
    pub fn advance_frame(&mut self) {
        self.pointer.primary = self.pointer.primary.advance();
        self.pointer.edges.clear();

        // Finished touches are gone next frame, live ones sit still until moved
        self.touches.retain(|touch| !touch.phase.is_finished());
        for touch in &mut self.touches {
            touch.phase = TouchPhase::Stationary;
            touch.delta = Vec2::ZERO;
            touch.started = false;
        }
    }

    /// Touch record for a finger id, if it is on the surface
    pub fn touch(&self, id: u64) -> Option<&TouchPoint> {
        self.touches.iter().find(|touch| touch.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edges_advance_to_steady_states() {
        assert_eq!(ButtonState::JustPressed.advance(), ButtonState::Pressed);
        assert_eq!(ButtonState::JustReleased.advance(), ButtonState::Released);
        assert_eq!(ButtonState::Pressed.advance(), ButtonState::Pressed);
        assert!(ButtonState::JustPressed.is_down());
        assert!(!ButtonState::JustReleased.is_down());
    }

    #[test]
    fn test_advance_frame_settles_touches() {
        let mut state = DeviceState::new();
        state.touches.push(TouchPoint::new(
            1,
            TouchPhase::Began,
            Vec2::new(10.0, 10.0),
            Vec2::new(2.0, 0.0),
        ));
        state
            .touches
            .push(TouchPoint::new(2, TouchPhase::Ended, Vec2::ZERO, Vec2::ZERO));

        state.advance_frame();

        assert_eq!(state.touches.len(), 1);
        let touch = state.touch(1).copied();
        assert_eq!(touch.map(|t| t.phase), Some(TouchPhase::Stationary));
        assert_eq!(touch.map(|t| t.delta), Some(Vec2::ZERO));
        assert_eq!(touch.map(|t| t.started), Some(false));
        assert!(state.touch(2).is_none());
    }

    #[test]
    fn test_pointer_edges_keep_order_within_a_frame() {
        let mut state = DeviceState::new();
        state.pointer.position = Some(Vec2::new(1.0, 1.0));
        state.pointer.press();
        state.pointer.position = Some(Vec2::new(4.0, 1.0));
        state.pointer.release();

        let edges: Vec<_> = state.pointer.edges.iter().map(|e| e.edge).collect();
        assert_eq!(edges, vec![ButtonEdge::Pressed, ButtonEdge::Released]);
        assert_eq!(state.pointer.edges[0].position, Some(Vec2::new(1.0, 1.0)));
        assert_eq!(state.pointer.primary, ButtonState::JustReleased);

        state.advance_frame();
        assert!(state.pointer.edges.is_empty());
        assert_eq!(state.pointer.primary, ButtonState::Released);
    }
}
