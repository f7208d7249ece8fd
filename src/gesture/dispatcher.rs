//! Gesture ownership and event routing

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use super::handler::{GestureHandler, SharedHandler};
use super::info::{GestureInfo, GesturePhase};
use super::trace::TraceBuffer;
use crate::config::GestureSettings;
use crate::input::{DeviceState, InputSource};

type WeakHandler = Weak<RefCell<dyn GestureHandler>>;

/// Registered handler with its priority captured at registration
struct HandlerEntry {
    priority: i32,
    handler: WeakHandler,
}

/// Central gesture recognition and routing system
///
/// Every tick it samples the injected input source, keeps a trace of the
/// pointer while a gesture is owned, and routes down/drag/up/flick callbacks to
/// the owning handler only.
pub struct GestureDispatcher {
    /// Registered handlers, sorted by priority (lowest first)
    handlers: Vec<HandlerEntry>,
    /// Handler owning the gesture in progress
    owner: Option<WeakHandler>,
    trace: TraceBuffer,
    source: Box<dyn InputSource>,
    settings: GestureSettings,
    /// Debug: snapshot dispatched last tick
    last_info: Option<GestureInfo>,
}

impl GestureDispatcher {
    /// Creates a dispatcher reading from `source`
    pub fn new(source: Box<dyn InputSource>, settings: GestureSettings) -> Self {
        Self {
            handlers: Vec::new(),
            owner: None,
            trace: TraceBuffer::new(settings.trace_capacity),
            source,
            settings,
            last_info: None,
        }
    }

    /// Register a gesture handler
    ///
    /// The handler is placed after every entry with a lower or equal priority.
    /// Registering the same handler twice is a no-op.
    pub fn register(&mut self, handler: &SharedHandler) {
        self.prune();

        let weak = Rc::downgrade(handler);
        if self.handlers.iter().any(|e| Weak::ptr_eq(&e.handler, &weak)) {
            warn!("Handler already registered, ignoring");
            return;
        }

        let (name, priority) = {
            let h = handler.borrow();
            (h.name().to_string(), h.priority())
        };
        let index = self.handlers.partition_point(|e| e.priority <= priority);
        self.handlers.insert(
            index,
            HandlerEntry {
                priority,
                handler: weak,
            },
        );
        debug!(handler = %name, priority, index, "Registered gesture handler");
    }

    /// Unregister a gesture handler
    ///
    /// Unknown handlers are ignored. If the handler owns the gesture in
    /// progress, that gesture ends without further callbacks.
    pub fn unregister(&mut self, handler: &SharedHandler) {
        let weak = Rc::downgrade(handler);
        let before = self.handlers.len();
        self.handlers.retain(|e| !Weak::ptr_eq(&e.handler, &weak));

        if self
            .owner
            .as_ref()
            .is_some_and(|owner| Weak::ptr_eq(owner, &weak))
        {
            debug!("Unregistered handler owned the active gesture");
            self.owner = None;
        }

        if self.handlers.len() < before {
            debug!(remaining = self.handlers.len(), "Unregistered gesture handler");
        }
    }

    /// Samples input and dispatches this tick's gesture events
    ///
    /// `delta_time` is the frame time in seconds. Every sample the source
    /// reports is dispatched in order, so a press and release landing in the
    /// same frame still produce a down followed by an up. Returns the last
    /// snapshot produced, or `None` when the input source reported nothing.
    pub fn tick(&mut self, device: &DeviceState, delta_time: f32) -> Option<GestureInfo> {
        let mut last = None;

        for sample in self.source.sample(device) {
            let info = GestureInfo::from_sample(sample);
            trace!(phase = ?info.phase, position = ?info.screen_position, "Gesture sample");

            let info = match info.phase {
                GesturePhase::Down => self.handle_down(info),
                GesturePhase::Drag => self.handle_drag(info, delta_time),
                GesturePhase::Up => self.handle_up(info),
            };
            last = Some(info);
        }

        if last.is_some() {
            self.last_info = last;
        }
        last
    }

    fn handle_down(&mut self, info: GestureInfo) -> GestureInfo {
        self.trace.clear();
        let info = info.with_trace(0.0, glam::Vec3::ZERO);

        if self.owner.take().is_some() {
            debug!("Down while a gesture was active, dropping previous owner");
        }

        self.prune();
        let owner = self.handlers.iter().find_map(|entry| {
            let handler = entry.handler.upgrade()?;
            let wants = handler
                .try_borrow()
                .map(|h| h.wants_gesture(&info))
                .unwrap_or(false);
            wants.then_some(handler)
        });

        match owner {
            Some(handler) => {
                self.owner = Some(Rc::downgrade(&handler));
                Self::invoke(&handler, |h| {
                    debug!(owner = %h.name(), "Gesture started");
                    h.on_down(info)
                });
            }
            None => trace!("No handler wants this gesture"),
        }

        info
    }

    fn handle_drag(&mut self, info: GestureInfo, delta_time: f32) -> GestureInfo {
        let Some(owner) = self.current_owner() else {
            return info;
        };

        self.trace.push(info.screen_position, delta_time);
        let info = info.with_trace(self.trace.total_elapsed(), self.trace.vector(0, 0));
        Self::invoke(&owner, |h| h.on_drag(info));

        info
    }

    fn handle_up(&mut self, info: GestureInfo) -> GestureInfo {
        let Some(owner) = self.current_owner() else {
            return info;
        };

        let info = info.with_trace(self.trace.total_elapsed(), self.trace.vector(0, 0));
        Self::invoke(&owner, |h| h.on_up(info));

        if self.is_flick() {
            Self::invoke(&owner, |h| {
                debug!(
                    owner = %h.name(),
                    distance = ?info.drag_distance,
                    elapsed = info.elapsed_time,
                    "Flick detected"
                );
                h.on_flick(info)
            });
        }

        self.owner = None;
        info
    }

    /// Whether the whole trace and its most recent segment point the same way
    fn is_flick(&self) -> bool {
        let window = self.settings.flick_window as isize;
        let full = self.trace.vector(0, 0);
        let recent = self.trace.vector(self.trace.len() as isize - window, 0);

        match (full.try_normalize(), recent.try_normalize()) {
            (Some(full), Some(recent)) => full.dot(recent) > self.settings.flick_threshold,
            _ => false,
        }
    }

    /// Live owner, clearing it if the handler was dropped
    fn current_owner(&mut self) -> Option<SharedHandler> {
        let owner = self.owner.as_ref()?.upgrade();
        if owner.is_none() {
            debug!("Gesture owner was dropped mid-gesture");
            self.owner = None;
        }
        owner
    }

    fn invoke(handler: &SharedHandler, f: impl FnOnce(&mut dyn GestureHandler)) {
        match handler.try_borrow_mut() {
            Ok(mut h) => f(&mut *h),
            Err(_) => warn!("Gesture handler already borrowed, skipping callback"),
        }
    }

    /// Drops entries whose handler no longer exists
    fn prune(&mut self) {
        self.handlers.retain(|e| e.handler.strong_count() > 0);
    }

    /// Whether a handler currently owns a gesture
    pub fn is_active(&self) -> bool {
        self.owner
            .as_ref()
            .is_some_and(|owner| owner.strong_count() > 0)
    }

    /// Get number of live registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers
            .iter()
            .filter(|e| e.handler.strong_count() > 0)
            .count()
    }

    /// Get debug information about all handlers, in dispatch order
    pub fn debug_handlers(&self) -> Vec<(String, i32)> {
        self.handlers
            .iter()
            .filter_map(|e| {
                let handler = e.handler.upgrade()?;
                let name = handler.try_borrow().ok()?.name().to_string();
                Some((name, e.priority))
            })
            .collect()
    }

    /// Get the snapshot dispatched last tick (for debugging)
    pub fn last_info(&self) -> Option<&GestureInfo> {
        self.last_info.as_ref()
    }

    /// Trace of the gesture in progress
    pub fn trace(&self) -> &TraceBuffer {
        &self.trace
    }

    /// Name of the active input source
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }
}
