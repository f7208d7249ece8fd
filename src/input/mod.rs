//! Input collection and input strategies
//!
//! Turns raw winit events into per-frame device state, then into the ordered
//! gesture samples of that frame:
//!
//! ```text
//! Raw Input (winit) → InputCollector → DeviceState
//!                                          ↓
//!                                    InputSource
//!                               (PointerSource | TouchSource)
//!                                          ↓
//!                                 Vec<PointerSample>
//! ```
//!
//! The source is picked once at startup with [`select_source`] and handed to
//! the gesture dispatcher.

mod collector;
mod pointer;
mod source;
mod state;
mod touch;

// Re-export public API
pub use collector::InputCollector;
pub use pointer::PointerSource;
pub use source::{InputMode, InputSource, PointerSample, is_touch_platform, select_source};
pub use state::{
    ButtonEdge, ButtonState, DeviceState, PointerEdge, PointerState, TouchPhase, TouchPoint,
};
pub use touch::TouchSource;
