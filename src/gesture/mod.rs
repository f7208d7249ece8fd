//! Gesture recognition and dispatch
//!
//! Provides priority-based gesture ownership:
//! - Samples the selected input source once per tick
//! - Picks a single owning handler when a gesture starts
//! - Keeps a rolling trace of the pointer while the gesture is held
//! - Detects flicks when the gesture is released
//!
//! # Architecture
//!
//! ```text
//! DeviceState → InputSource → PointerSample
//!                                  ↓
//!                          GestureDispatcher
//!                   (TraceBuffer, owner selection)
//!                                  ↓
//!                     GestureHandler (owner only)
//!                  on_down / on_drag / on_up / on_flick
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut dispatcher = GestureDispatcher::new(select_source(mode), settings);
//! let camera: SharedHandler = Rc::new(RefCell::new(CameraPanHandler::new(...)));
//! dispatcher.register(&camera);
//!
//! // Each frame
//! dispatcher.tick(collector.state(), delta_time);
//! camera.borrow_mut().tick(delta_time);
//! collector.advance_frame();
//! ```

mod dispatcher;
mod handler;
mod info;
mod trace;

// Re-export public API
pub use dispatcher::GestureDispatcher;
pub use handler::{GestureHandler, SharedHandler};
pub use info::{GestureInfo, GesturePhase};
pub use trace::{DEFAULT_TRACE_CAPACITY, TraceBuffer};
