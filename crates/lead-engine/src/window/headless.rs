use std::collections::VecDeque;

use crate::event::{Event, WindowResizeEvent};
use crate::logging::Logger;

use super::contract::{EventCallback, Window, WindowConfig};

type Script = Box<dyn FnMut(u64) -> Vec<Event>>;

/// Window backend without a display.
///
/// Events are injected with [`push_event`](Self::push_event) or produced per
/// frame by a script; [`Window::update`] delivers them in FIFO order. Used by
/// tests and tooling that drive an [`App`](crate::core::App) deterministically.
pub struct HeadlessWindow {
    config: WindowConfig,
    queue: VecDeque<Event>,
    script: Option<Script>,
    frames: u64,
    logger: Logger,
}

impl HeadlessWindow {
    pub fn new(config: WindowConfig, logger: Logger) -> Self {
        log::info!(
            logger: logger,
            "creating headless window {} ({}, {})",
            config.title,
            config.width,
            config.height
        );

        Self {
            config,
            queue: VecDeque::new(),
            script: None,
            frames: 0,
            logger,
        }
    }

    /// Installs a script called at the start of every update with the
    /// zero-based frame index. Returned events are queued behind anything
    /// already pending.
    pub fn with_script<F>(mut self, script: F) -> Self
    where
        F: FnMut(u64) -> Vec<Event> + 'static,
    {
        self.script = Some(Box::new(script));
        self
    }

    pub fn push_event(&mut self, event: impl Into<Event>) {
        self.queue.push_back(event.into());
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of completed `update` calls.
    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl Window for HeadlessWindow {
    fn update(&mut self, callback: &mut dyn EventCallback) {
        if let Some(script) = self.script.as_mut() {
            self.queue.extend(script(self.frames));
        }
        self.frames += 1;

        while let Some(mut event) = self.queue.pop_front() {
            if let Some(&WindowResizeEvent { width, height }) = event.get::<WindowResizeEvent>() {
                self.config.width = width;
                self.config.height = height;
            }
            log::trace!(logger: self.logger, "headless: {event}");
            callback.on_event(&mut event);
        }
    }

    fn width(&self) -> u32 {
        self.config.width
    }

    fn height(&self) -> u32 {
        self.config.height
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.config.vsync = enabled;
    }

    fn is_vsync(&self) -> bool {
        self.config.vsync
    }
}
