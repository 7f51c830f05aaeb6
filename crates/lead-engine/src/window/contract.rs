use crate::event::Event;

/// Requested window properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Lead Engine".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }
}

/// Receiver of events produced by a window backend.
///
/// Passed to [`Window::update`] on every pump rather than stored in the
/// window, so the window never holds a reference back into its owner.
pub trait EventCallback {
    fn on_event(&mut self, event: &mut Event);
}

impl<F> EventCallback for F
where
    F: FnMut(&mut Event),
{
    fn on_event(&mut self, event: &mut Event) {
        self(event)
    }
}

/// Platform window as seen by the app.
pub trait Window {
    /// Presents the current frame, then delivers every pending platform event
    /// to `callback` in arrival order before returning.
    fn update(&mut self, callback: &mut dyn EventCallback);

    /// Client area width as of the last resize.
    fn width(&self) -> u32;

    /// Client area height as of the last resize.
    fn height(&self) -> u32;

    fn title(&self) -> &str;

    fn set_vsync(&mut self, enabled: bool);

    fn is_vsync(&self) -> bool;
}
