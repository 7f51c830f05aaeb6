use std::fmt;

use super::keys::{KeyCode, MouseButton};
use super::kind::{EventCategory, EventKind};

/// Window close was requested by the platform.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct WindowCloseEvent;

/// Client area was resized, in physical pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowResizeEvent {
    pub width: u32,
    pub height: u32,
}

/// Window gained input focus.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct WindowFocusEvent;

/// Window lost input focus.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct WindowLostFocusEvent;

/// Window moved; position of the outer top-left corner in physical pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowMovedEvent {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyPressEvent {
    pub key: KeyCode,
    /// 0 for the initial press, non-zero for OS key repeats.
    pub repeat_count: u32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyReleaseEvent {
    pub key: KeyCode,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyHeldEvent {
    pub key: KeyCode,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MouseButtonPressEvent {
    pub button: MouseButton,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MouseButtonReleaseEvent {
    pub button: MouseButton,
}

/// Pointer position in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MouseMoveEvent {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MouseScrollEvent {
    pub x_offset: f32,
    pub y_offset: f32,
}

impl WindowResizeEvent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl WindowMovedEvent {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl KeyPressEvent {
    pub fn new(key: KeyCode, repeat_count: u32) -> Self {
        Self { key, repeat_count }
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat_count > 0
    }
}

impl KeyReleaseEvent {
    pub fn new(key: KeyCode) -> Self {
        Self { key }
    }
}

impl KeyHeldEvent {
    pub fn new(key: KeyCode) -> Self {
        Self { key }
    }
}

impl MouseButtonPressEvent {
    pub fn new(button: MouseButton) -> Self {
        Self { button }
    }
}

impl MouseButtonReleaseEvent {
    pub fn new(button: MouseButton) -> Self {
        Self { button }
    }
}

impl MouseMoveEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl MouseScrollEvent {
    pub fn new(x_offset: f32, y_offset: f32) -> Self {
        Self { x_offset, y_offset }
    }
}

/// A concrete event payload type with a statically known kind.
///
/// Implemented for every payload struct in this module; used by
/// [`EventDispatcher`](super::EventDispatcher) to select a handler by type.
pub trait EventType: Sized + Into<EventData> {
    const KIND: EventKind;

    /// Returns the payload if `data` holds this type.
    fn narrow(data: &EventData) -> Option<&Self>;
}

macro_rules! event_data {
    ($($variant:ident($ty:ident)),+ $(,)?) => {
        /// Payload of an [`Event`], one variant per [`EventKind`].
        #[derive(Debug, Clone, PartialEq)]
        pub enum EventData {
            $($variant($ty),)+
        }

        impl EventData {
            pub fn kind(&self) -> EventKind {
                match self {
                    $(EventData::$variant(_) => EventKind::$variant,)+
                }
            }
        }

        $(
            impl From<$ty> for EventData {
                fn from(e: $ty) -> Self {
                    EventData::$variant(e)
                }
            }

            impl EventType for $ty {
                const KIND: EventKind = EventKind::$variant;

                fn narrow(data: &EventData) -> Option<&Self> {
                    match data {
                        EventData::$variant(e) => Some(e),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }
        )+
    };
}

event_data! {
    WindowClose(WindowCloseEvent),
    WindowResize(WindowResizeEvent),
    WindowFocus(WindowFocusEvent),
    WindowLostFocus(WindowLostFocusEvent),
    WindowMoved(WindowMovedEvent),
    KeyPress(KeyPressEvent),
    KeyRelease(KeyReleaseEvent),
    KeyHeld(KeyHeldEvent),
    MousePress(MouseButtonPressEvent),
    MouseRelease(MouseButtonReleaseEvent),
    MouseMove(MouseMoveEvent),
    MouseScroll(MouseScrollEvent),
}

/// One occurrence reported by a window backend.
///
/// The payload (and therefore kind and category) is fixed at construction.
/// Only the handled flag changes, and only from `false` to `true`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    data: EventData,
    handled: bool,
}

impl Event {
    pub fn new(data: impl Into<EventData>) -> Self {
        Self {
            data: data.into(),
            handled: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.data.kind()
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn categories(&self) -> EventCategory {
        self.kind().categories()
    }

    /// True if the event belongs to any of the categories in `category`.
    pub fn in_category(&self, category: EventCategory) -> bool {
        self.categories().intersects(category)
    }

    pub fn data(&self) -> &EventData {
        &self.data
    }

    /// Returns the payload if this event is of type `T`.
    pub fn get<T: EventType>(&self) -> Option<&T> {
        T::narrow(&self.data)
    }

    pub fn is<T: EventType>(&self) -> bool {
        self.kind() == T::KIND
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Stores a dispatcher handler's verdict.
    pub(crate) fn set_handled(&mut self, handled: bool) {
        self.handled = handled;
    }
}

impl<T: EventType> From<T> for Event {
    fn from(e: T) -> Self {
        Event::new(e)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            EventData::WindowResize(e) => {
                write!(f, "WindowResizeEvent: {}, {}", e.width, e.height)
            }
            EventData::WindowMoved(e) => write!(f, "WindowMovedEvent: {}, {}", e.x, e.y),
            EventData::KeyPress(e) => {
                write!(f, "KeyPressEvent: {} ({} repeats)", e.key, e.repeat_count)
            }
            EventData::KeyRelease(e) => write!(f, "KeyReleaseEvent: {}", e.key),
            EventData::KeyHeld(e) => write!(f, "KeyHeldEvent: {}", e.key),
            EventData::MousePress(e) => write!(f, "MouseButtonPressEvent: {}", e.button),
            EventData::MouseRelease(e) => write!(f, "MouseButtonReleaseEvent: {}", e.button),
            EventData::MouseMove(e) => write!(f, "MouseMoveEvent: {}, {}", e.x, e.y),
            EventData::MouseScroll(e) => {
                write!(f, "MouseScrollEvent: {}, {}", e.x_offset, e.y_offset)
            }
            EventData::WindowClose(_)
            | EventData::WindowFocus(_)
            | EventData::WindowLostFocus(_) => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_is_unhandled() {
        let e = Event::new(WindowCloseEvent);
        assert!(!e.is_handled());
        assert_eq!(e.kind(), EventKind::WindowClose);
    }

    #[test]
    fn set_handled_overwrites() {
        let mut e = Event::new(MouseMoveEvent::new(1.0, 2.0));
        e.set_handled(true);
        assert!(e.is_handled());
        e.set_handled(false);
        assert!(!e.is_handled());
    }

    #[test]
    fn get_narrows_to_matching_payload() {
        let e = Event::new(WindowResizeEvent::new(800, 600));
        assert_eq!(e.get::<WindowResizeEvent>(), Some(&WindowResizeEvent::new(800, 600)));
        assert!(e.get::<KeyPressEvent>().is_none());
        assert!(e.is::<WindowResizeEvent>());
    }

    #[test]
    fn kind_follows_payload_type() {
        assert_eq!(Event::from(KeyHeldEvent::new(KeyCode::W)).kind(), EventKind::KeyHeld);
        assert_eq!(
            Event::from(MouseButtonReleaseEvent::new(MouseButton::Right)).kind(),
            EventKind::MouseRelease
        );
        assert_eq!(MouseScrollEvent::KIND, EventKind::MouseScroll);
    }

    #[test]
    fn in_category_matches_any_flag() {
        let e = Event::new(KeyPressEvent::new(KeyCode::A, 0));
        assert!(e.in_category(EventCategory::KEYBOARD));
        assert!(e.in_category(EventCategory::INPUT | EventCategory::APP));
        assert!(!e.in_category(EventCategory::MOUSE));
    }

    #[test]
    fn display_formats() {
        assert_eq!(
            Event::new(WindowResizeEvent::new(1280, 720)).to_string(),
            "WindowResizeEvent: 1280, 720"
        );
        assert_eq!(
            Event::new(KeyPressEvent::new(KeyCode::A, 1)).to_string(),
            "KeyPressEvent: A (1 repeats)"
        );
        assert_eq!(
            Event::new(MouseMoveEvent::new(10.5, 20.0)).to_string(),
            "MouseMoveEvent: 10.5, 20"
        );
        assert_eq!(Event::new(WindowCloseEvent).to_string(), "WindowClose");
    }
}
