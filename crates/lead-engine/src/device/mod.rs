//! GPU device + surface for the desktop window.
//!
//! Only what the window needs to present frames: device/queue creation, the
//! configured surface (swapchain), resize and present-mode changes. Rendering
//! beyond a clear belongs to layers and is not handled here.

mod gpu;

pub use gpu::{present_mode_for, Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
