//! Application core.
//!
//! [`App`] ties a [`Window`](crate::window::Window) to a
//! [`LayerStack`](crate::layer::LayerStack): it runs the frame loop, handles
//! window close, and propagates every event to the layers. Layers talk back
//! through [`LayerCtx`], whose requests are applied between passes.

mod app;
mod ctx;

pub use app::{App, AppState};
pub use ctx::{LayerCtx, WindowInfo};
