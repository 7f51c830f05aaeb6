//! Window boundary.
//!
//! [`Window`] is what the app drives: present + pump once per frame, with
//! events handed to an [`EventCallback`] supplied on each call. Backends:
//! - [`WinitWindow`]: native window via `winit`, presentation via `wgpu`
//! - [`HeadlessWindow`]: scripted event queue, no display

mod contract;
mod desktop;
mod headless;
mod translate;

pub use contract::{EventCallback, Window, WindowConfig};
pub use desktop::WinitWindow;
pub use headless::HeadlessWindow;
