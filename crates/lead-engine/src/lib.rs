//! Lead engine runtime.
//!
//! Owns the window, turns platform input into typed [`event::Event`]s, and
//! drives a stack of [`layer::Layer`]s once per frame.

pub mod core;
pub mod device;
pub mod entry;
pub mod event;
pub mod layer;
pub mod logging;
pub mod time;
pub mod window;

pub use crate::core::{App, AppState, LayerCtx};
pub use event::{Event, EventDispatcher};
pub use layer::{Layer, LayerId, LayerStack};
pub use logging::{init_logging, Logger, LoggingConfig};
pub use window::{Window, WindowConfig};
