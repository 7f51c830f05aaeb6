use crate::layer::{Layer, LayerId};
use crate::logging::Logger;
use crate::time::FrameTime;
use crate::window::Window;

/// Read-only window metadata visible to layers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WindowInfo {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl WindowInfo {
    pub(crate) fn of(window: &dyn Window) -> Self {
        Self {
            width: window.width(),
            height: window.height(),
            vsync: window.is_vsync(),
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f32 / self.height as f32
    }
}

/// Context passed to [`Layer::update`] and [`Layer::on_event`].
///
/// Structural requests (push/pop/exit) are buffered and applied by the app
/// after the current update pass or event propagation returns, so the layer
/// stack is never modified while it is being walked.
pub struct LayerCtx<'a> {
    pub time: FrameTime,
    pub window: WindowInfo,
    logger: &'a Logger,
    commands: Vec<Command>,
}

pub(crate) enum Command {
    PushLayer(LayerId, Box<dyn Layer>),
    PushOverlay(LayerId, Box<dyn Layer>),
    PopLayer(LayerId),
    PopOverlay(LayerId),
    Exit,
}

impl<'a> LayerCtx<'a> {
    pub(crate) fn new(time: FrameTime, window: WindowInfo, logger: &'a Logger) -> Self {
        Self {
            time,
            window,
            logger,
            commands: Vec::new(),
        }
    }

    pub(crate) fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// The logger the app was built with.
    pub fn logger(&self) -> &Logger {
        self.logger
    }

    /// Queues a regular layer push. The returned id is valid immediately for
    /// later pops, though the layer only becomes resident once applied.
    pub fn push_layer<L>(&mut self, layer: L) -> LayerId
    where
        L: Layer + 'static,
    {
        let id = LayerId::next();
        self.commands.push(Command::PushLayer(id, Box::new(layer)));
        id
    }

    pub fn push_overlay<L>(&mut self, overlay: L) -> LayerId
    where
        L: Layer + 'static,
    {
        let id = LayerId::next();
        self.commands.push(Command::PushOverlay(id, Box::new(overlay)));
        id
    }

    pub fn pop_layer(&mut self, id: LayerId) {
        self.commands.push(Command::PopLayer(id));
    }

    pub fn pop_overlay(&mut self, id: LayerId) {
        self.commands.push(Command::PopOverlay(id));
    }

    /// Stops the app once the current pass finishes.
    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    pub fn has_pending(&self) -> bool {
        !self.commands.is_empty()
    }
}
