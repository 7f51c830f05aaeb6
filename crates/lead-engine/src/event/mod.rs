//! Event model.
//!
//! Events are a closed set of kinds, each with its own payload type. Window
//! backends construct them; the app routes them through the layer stack.
//! [`EventDispatcher`] selects a handler by payload type with a plain match,
//! so there is no runtime type registry and no downcasting.

mod dispatcher;
#[allow(clippy::module_inception)]
mod event;
mod keys;
mod kind;

pub use dispatcher::EventDispatcher;
pub use event::{
    Event,
    EventData,
    EventType,
    KeyHeldEvent,
    KeyPressEvent,
    KeyReleaseEvent,
    MouseButtonPressEvent,
    MouseButtonReleaseEvent,
    MouseMoveEvent,
    MouseScrollEvent,
    WindowCloseEvent,
    WindowFocusEvent,
    WindowLostFocusEvent,
    WindowMovedEvent,
    WindowResizeEvent,
};
pub use keys::{KeyCode, MouseButton};
pub use kind::{EventCategory, EventKind};
