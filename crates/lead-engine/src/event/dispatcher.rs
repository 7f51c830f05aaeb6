use super::event::{Event, EventType};

/// Routes one event to a handler chosen by payload type.
///
/// ```
/// use lead_engine::event::{Event, EventDispatcher, WindowResizeEvent, KeyPressEvent};
///
/// let mut event = Event::new(WindowResizeEvent::new(640, 480));
/// let mut dispatcher = EventDispatcher::new(&mut event);
///
/// assert!(!dispatcher.dispatch::<KeyPressEvent, _>(|_| true));
/// assert!(dispatcher.dispatch::<WindowResizeEvent, _>(|e| e.width == 640));
/// assert!(event.is_handled());
/// ```
pub struct EventDispatcher<'e> {
    event: &'e mut Event,
}

impl<'e> EventDispatcher<'e> {
    pub fn new(event: &'e mut Event) -> Self {
        Self { event }
    }

    /// Invokes `handler` if the event holds a `T`.
    ///
    /// Returns whether the handler ran. The handler's result replaces the
    /// event's handled flag, so a declining handler un-handles it.
    pub fn dispatch<T, F>(&mut self, handler: F) -> bool
    where
        T: EventType,
        F: FnOnce(&T) -> bool,
    {
        let Some(payload) = self.event.get::<T>() else {
            return false;
        };

        let handled = handler(payload);
        self.event.set_handled(handled);
        true
    }

    pub fn event(&self) -> &Event {
        self.event
    }
}
