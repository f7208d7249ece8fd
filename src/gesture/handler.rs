//! Gesture handler trait for interactive elements

use std::cell::RefCell;
use std::rc::Rc;

use super::info::GestureInfo;

/// Shared handle to a handler, owned by the application
///
/// The dispatcher only keeps weak references to these.
pub type SharedHandler = Rc<RefCell<dyn GestureHandler>>;

/// Trait for elements that consume gestures
///
/// On every down event the dispatcher asks handlers, in priority order,
/// whether they want the gesture. The first one that accepts owns the gesture
/// and is the only one that sees its drag, up and flick callbacks.
pub trait GestureHandler {
    /// Name of this handler for debugging
    fn name(&self) -> &str;

    /// Evaluation order (lower = asked first)
    ///
    /// Read once at registration time.
    fn priority(&self) -> i32;

    /// Whether this handler wants to own the gesture starting with `info`
    fn wants_gesture(&self, info: &GestureInfo) -> bool;

    /// Called when the owned gesture starts
    fn on_down(&mut self, info: GestureInfo);

    /// Called when the owned gesture ends
    fn on_up(&mut self, _info: GestureInfo) {
        // Default: no-op
    }

    /// Called every tick the pointer is held during the owned gesture
    fn on_drag(&mut self, _info: GestureInfo) {
        // Default: no-op
    }

    /// Called right after `on_up` when the release looks like a flick
    fn on_flick(&mut self, _info: GestureInfo) {
        // Default: no-op
    }
}
