use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::LayerCtx;
use crate::event::Event;

/// Identity of a layer placed on a [`LayerStack`](super::LayerStack).
///
/// Returned by every push and used to pop the layer again. Ids are unique for
/// the lifetime of the process; layer names are not.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LayerId(u64);

impl LayerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        LayerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Participant in the frame loop.
///
/// Every hook has a no-op default; implement the ones you need.
///
/// - `on_attach` runs once when the layer is pushed, `on_detach` once when it
///   is popped or when the app shuts down with the layer still resident.
/// - `update` runs once per frame, oldest regular layer first, overlays last.
/// - `on_event` runs for each propagated event, overlays first. A layer
///   consumes an event by marking it handled, typically through an
///   [`EventDispatcher`](crate::event::EventDispatcher) handler returning
///   `true`; later layers then never see it.
///
/// Hooks must not fail. A layer that can fail should record it in its own
/// state or request [`LayerCtx::exit`].
pub trait Layer {
    /// Debug name, used only for diagnostics.
    fn name(&self) -> &str {
        "Layer"
    }

    fn on_attach(&mut self) {}

    fn on_detach(&mut self) {}

    fn update(&mut self, ctx: &mut LayerCtx<'_>) {
        let _ = ctx;
    }

    fn on_event(&mut self, event: &mut Event, ctx: &mut LayerCtx<'_>) {
        let _ = (event, ctx);
    }
}

impl fmt::Debug for dyn Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Layer").field(&self.name()).finish()
    }
}
