use std::fmt;

bitflags::bitflags! {
    /// Coarse event classification used for filtering.
    ///
    /// A kind may belong to several categories (a key press is both
    /// `KEYBOARD` and `INPUT`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EventCategory: u8 {
        const APP          = 1 << 0;
        const INPUT        = 1 << 1;
        const KEYBOARD     = 1 << 2;
        const MOUSE        = 1 << 3;
        const MOUSE_BUTTON = 1 << 4;
    }
}

/// Runtime identity of an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventKind {
    WindowClose,
    WindowResize,
    WindowFocus,
    WindowLostFocus,
    WindowMoved,

    KeyPress,
    KeyRelease,
    KeyHeld,

    MousePress,
    MouseRelease,
    MouseMove,
    MouseScroll,
}

impl EventKind {
    pub const ALL: [EventKind; 12] = [
        EventKind::WindowClose,
        EventKind::WindowResize,
        EventKind::WindowFocus,
        EventKind::WindowLostFocus,
        EventKind::WindowMoved,
        EventKind::KeyPress,
        EventKind::KeyRelease,
        EventKind::KeyHeld,
        EventKind::MousePress,
        EventKind::MouseRelease,
        EventKind::MouseMove,
        EventKind::MouseScroll,
    ];

    /// Categories every event of this kind belongs to.
    pub const fn categories(self) -> EventCategory {
        match self {
            EventKind::WindowClose
            | EventKind::WindowResize
            | EventKind::WindowFocus
            | EventKind::WindowLostFocus
            | EventKind::WindowMoved => EventCategory::APP,

            EventKind::KeyPress | EventKind::KeyRelease | EventKind::KeyHeld => {
                EventCategory::KEYBOARD.union(EventCategory::INPUT)
            }

            EventKind::MouseMove | EventKind::MouseScroll => {
                EventCategory::MOUSE.union(EventCategory::INPUT)
            }

            EventKind::MousePress | EventKind::MouseRelease => EventCategory::MOUSE
                .union(EventCategory::MOUSE_BUTTON)
                .union(EventCategory::INPUT),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            EventKind::WindowClose => "WindowClose",
            EventKind::WindowResize => "WindowResize",
            EventKind::WindowFocus => "WindowFocus",
            EventKind::WindowLostFocus => "WindowLostFocus",
            EventKind::WindowMoved => "WindowMoved",
            EventKind::KeyPress => "KeyPress",
            EventKind::KeyRelease => "KeyRelease",
            EventKind::KeyHeld => "KeyHeld",
            EventKind::MousePress => "MousePress",
            EventKind::MouseRelease => "MouseRelease",
            EventKind::MouseMove => "MouseMove",
            EventKind::MouseScroll => "MouseScroll",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
