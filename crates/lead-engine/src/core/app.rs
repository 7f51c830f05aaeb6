use anyhow::Result;

use crate::device::GpuInit;
use crate::event::{Event, EventDispatcher, WindowCloseEvent, WindowResizeEvent};
use crate::layer::{Layer, LayerId, LayerStack};
use crate::logging::Logger;
use crate::time::{FrameClock, FrameTime};
use crate::window::{EventCallback, Window, WindowConfig, WinitWindow};

use super::ctx::{Command, LayerCtx, WindowInfo};

/// Lifecycle of an [`App`]. `Stopped` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppState {
    Running,
    Stopped,
}

/// Owns the window and the layer stack and drives the frame loop.
///
/// Each frame: the window presents and pumps platform events (every event is
/// routed through [`App::on_event`] before `update` returns), then every
/// layer updates, regular layers first and overlays last.
pub struct App {
    window: Box<dyn Window>,
    core: AppCore,
}

/// Everything but the window, so the window can be pumped with the rest of
/// the app as its event callback.
struct AppCore {
    layers: LayerStack,
    state: AppState,
    clock: FrameClock,
    time: FrameTime,
    window: WindowInfo,
    logger: Logger,
}

impl App {
    /// Opens a desktop window with default GPU settings.
    ///
    /// Failing to create the window or its surface is fatal for the caller.
    pub fn new(config: WindowConfig, logger: Logger) -> Result<Self> {
        Self::with_gpu(config, GpuInit::default(), logger)
    }

    pub fn with_gpu(config: WindowConfig, gpu_init: GpuInit, logger: Logger) -> Result<Self> {
        let window = WinitWindow::create(config, gpu_init, logger.clone())?;
        Ok(Self::with_window(Box::new(window), logger))
    }

    /// Builds an app around any window backend.
    pub fn with_window(window: Box<dyn Window>, logger: Logger) -> Self {
        let info = WindowInfo::of(window.as_ref());
        Self {
            window,
            core: AppCore {
                layers: LayerStack::new(),
                state: AppState::Running,
                clock: FrameClock::new(),
                time: FrameTime::default(),
                window: info,
                logger,
            },
        }
    }

    /// Pushes a regular layer and attaches it.
    pub fn push_layer<L>(&mut self, layer: L) -> LayerId
    where
        L: Layer + 'static,
    {
        let id = LayerId::next();
        self.core.attach_layer(id, Box::new(layer));
        id
    }

    /// Pushes an overlay and attaches it.
    pub fn push_overlay<L>(&mut self, overlay: L) -> LayerId
    where
        L: Layer + 'static,
    {
        let id = LayerId::next();
        self.core.attach_overlay(id, Box::new(overlay));
        id
    }

    /// Detaches and drops a regular layer. Returns `false` if it was not
    /// resident.
    pub fn pop_layer(&mut self, id: LayerId) -> bool {
        self.core.pop_layer(id)
    }

    pub fn pop_overlay(&mut self, id: LayerId) -> bool {
        self.core.pop_overlay(id)
    }

    /// Runs frames until the app stops.
    pub fn run(&mut self) {
        log::info!(logger: self.core.logger, "running");
        self.core.clock.reset();

        while self.core.state == AppState::Running {
            self.core.window = WindowInfo::of(self.window.as_ref());
            self.window.update(&mut self.core);

            if self.core.state != AppState::Running {
                break;
            }
            self.core.update_layers();
        }

        log::info!(logger: self.core.logger, "stopped");
    }

    /// Routes one event: app housekeeping first, then the layers top-down
    /// until one marks it handled.
    pub fn on_event(&mut self, event: &mut Event) {
        self.core.on_event(event);
    }

    pub fn state(&self) -> AppState {
        self.core.state
    }

    pub fn is_running(&self) -> bool {
        self.core.state == AppState::Running
    }

    /// Moves the app to `Stopped`; `run` returns after the current frame.
    pub fn stop(&mut self) {
        self.core.stop("stop requested");
    }

    pub fn window(&self) -> &dyn Window {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> &mut dyn Window {
        self.window.as_mut()
    }

    pub fn layers(&self) -> &LayerStack {
        &self.core.layers
    }

    pub fn logger(&self) -> &Logger {
        &self.core.logger
    }
}

impl AppCore {
    fn on_event(&mut self, event: &mut Event) {
        log::trace!(logger: self.logger, "{event}");

        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch::<WindowCloseEvent, _>(|_| self.on_window_close());
        dispatcher.dispatch::<WindowResizeEvent, _>(|e| self.on_window_resize(e));

        let mut ctx = LayerCtx::new(self.time, self.window, &self.logger);
        for layer in self.layers.iter_rev_mut() {
            layer.on_event(event, &mut ctx);
            if event.is_handled() {
                break;
            }
        }

        let commands = ctx.into_commands();
        self.apply(commands);
    }

    fn on_window_close(&mut self) -> bool {
        self.stop("window closed");
        true
    }

    fn on_window_resize(&mut self, e: &WindowResizeEvent) -> bool {
        self.window.width = e.width;
        self.window.height = e.height;
        false
    }

    fn update_layers(&mut self) {
        self.time = self.clock.tick();

        let mut ctx = LayerCtx::new(self.time, self.window, &self.logger);
        for layer in self.layers.iter_mut() {
            layer.update(&mut ctx);
        }

        let commands = ctx.into_commands();
        self.apply(commands);
    }

    fn stop(&mut self, reason: &str) {
        if self.state == AppState::Running {
            log::info!(logger: self.logger, "{reason}; stopping");
            self.state = AppState::Stopped;
        }
    }

    fn apply(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::PushLayer(id, layer) => self.attach_layer(id, layer),
                Command::PushOverlay(id, overlay) => self.attach_overlay(id, overlay),
                Command::PopLayer(id) => {
                    self.pop_layer(id);
                }
                Command::PopOverlay(id) => {
                    self.pop_overlay(id);
                }
                Command::Exit => self.stop("exit requested by layer"),
            }
        }
    }

    fn attach_layer(&mut self, id: LayerId, mut layer: Box<dyn Layer>) {
        layer.on_attach();
        log::debug!(logger: self.logger, "attached layer {} {id}", layer.name());
        self.layers.insert_layer(id, layer);
    }

    fn attach_overlay(&mut self, id: LayerId, mut overlay: Box<dyn Layer>) {
        overlay.on_attach();
        log::debug!(logger: self.logger, "attached overlay {} {id}", overlay.name());
        self.layers.insert_overlay(id, overlay);
    }

    fn pop_layer(&mut self, id: LayerId) -> bool {
        match self.layers.pop_layer(id) {
            Some(layer) => {
                self.detach(id, layer);
                true
            }
            None => false,
        }
    }

    fn pop_overlay(&mut self, id: LayerId) -> bool {
        match self.layers.pop_overlay(id) {
            Some(overlay) => {
                self.detach(id, overlay);
                true
            }
            None => false,
        }
    }

    fn detach(&self, id: LayerId, mut layer: Box<dyn Layer>) {
        layer.on_detach();
        log::debug!(logger: self.logger, "detached {} {id}", layer.name());
    }
}

impl EventCallback for AppCore {
    fn on_event(&mut self, event: &mut Event) {
        AppCore::on_event(self, event);
    }
}

impl Drop for AppCore {
    fn drop(&mut self) {
        let remaining: Vec<_> = self.layers.drain_top_down().collect();
        for (id, layer) in remaining {
            self.detach(id, layer);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::event::{
        KeyCode, KeyPressEvent, MouseButton, MouseButtonPressEvent, MouseMoveEvent,
        MouseScrollEvent,
    };
    use crate::window::HeadlessWindow;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Records every hook call as "<name>:<hook>" and optionally consumes one
    /// event type.
    struct Probe {
        name: &'static str,
        log: Log,
        consume_scroll: bool,
    }

    impl Probe {
        fn new(name: &'static str, log: &Log) -> Self {
            Self {
                name,
                log: log.clone(),
                consume_scroll: false,
            }
        }

        fn consuming_scroll(mut self) -> Self {
            self.consume_scroll = true;
            self
        }

        fn record(&self, what: &str) {
            self.log.borrow_mut().push(format!("{}:{what}", self.name));
        }
    }

    impl Layer for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn on_attach(&mut self) {
            self.record("attach");
        }

        fn on_detach(&mut self) {
            self.record("detach");
        }

        fn update(&mut self, _ctx: &mut LayerCtx<'_>) {
            self.record("update");
        }

        fn on_event(&mut self, event: &mut Event, _ctx: &mut LayerCtx<'_>) {
            self.record(event.name());
            let consume = self.consume_scroll;
            EventDispatcher::new(event).dispatch::<MouseScrollEvent, _>(|_| consume);
        }
    }

    fn log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn take(log: &Log) -> Vec<String> {
        std::mem::take(&mut *log.borrow_mut())
    }

    fn app_with(window: HeadlessWindow) -> App {
        App::with_window(Box::new(window), Logger::silent())
    }

    fn headless() -> HeadlessWindow {
        HeadlessWindow::new(WindowConfig::default(), Logger::silent())
    }

    fn app() -> App {
        app_with(headless())
    }

    // ── propagation ───────────────────────────────────────────────────────

    #[test]
    fn propagation_visits_overlays_then_newest_regular() {
        let log = log();
        let mut app = app();
        app.push_layer(Probe::new("a", &log));
        app.push_layer(Probe::new("b", &log));
        app.push_overlay(Probe::new("c", &log));
        take(&log);

        app.on_event(&mut Event::new(MouseMoveEvent::new(0.0, 0.0)));

        assert_eq!(take(&log), ["c:MouseMove", "b:MouseMove", "a:MouseMove"]);
    }

    #[test]
    fn scroll_handled_by_bottom_layer_visits_all_three() {
        let log = log();
        let mut app = app();
        app.push_layer(Probe::new("a", &log).consuming_scroll());
        app.push_layer(Probe::new("b", &log));
        app.push_overlay(Probe::new("c", &log));
        take(&log);

        let mut event = Event::new(MouseScrollEvent::new(0.0, 1.0));
        app.on_event(&mut event);

        assert_eq!(take(&log), ["c:MouseScroll", "b:MouseScroll", "a:MouseScroll"]);
        assert!(event.is_handled());
    }

    #[test]
    fn handled_event_stops_propagation() {
        let log = log();
        let mut app = app();
        app.push_layer(Probe::new("a", &log));
        app.push_layer(Probe::new("b", &log).consuming_scroll());
        app.push_overlay(Probe::new("c", &log));
        take(&log);

        app.on_event(&mut Event::new(MouseScrollEvent::new(0.0, -1.0)));

        assert_eq!(take(&log), ["c:MouseScroll", "b:MouseScroll"]);
    }

    #[test]
    fn unhandled_event_reaches_every_layer() {
        let log = log();
        let mut app = app();
        app.push_layer(Probe::new("a", &log).consuming_scroll());
        app.push_overlay(Probe::new("c", &log));
        take(&log);

        let mut event = Event::new(KeyPressEvent::new(KeyCode::A, 0));
        app.on_event(&mut event);

        assert_eq!(take(&log), ["c:KeyPress", "a:KeyPress"]);
        assert!(!event.is_handled());
    }

    // ── close handling ────────────────────────────────────────────────────

    #[test]
    fn close_stops_app_and_is_observed_by_top_layer_only() {
        let log = log();
        let mut app = app();
        app.push_layer(Probe::new("a", &log));
        app.push_overlay(Probe::new("c", &log));
        take(&log);

        let mut event = Event::new(WindowCloseEvent);
        app.on_event(&mut event);

        assert_eq!(app.state(), AppState::Stopped);
        assert!(event.is_handled());
        assert_eq!(take(&log), ["c:WindowClose"]);
    }

    #[test]
    fn layers_cannot_veto_close() {
        struct Veto;
        impl Layer for Veto {
            fn on_event(&mut self, event: &mut Event, _ctx: &mut LayerCtx<'_>) {
                EventDispatcher::new(event).dispatch::<WindowCloseEvent, _>(|_| false);
            }
        }

        let log = log();
        let mut app = app();
        app.push_layer(Probe::new("a", &log));
        app.push_overlay(Veto);
        take(&log);

        let mut event = Event::new(WindowCloseEvent);
        app.on_event(&mut event);

        // Declining un-handles the close, so it travels on; the stop stays.
        assert!(!app.is_running());
        assert!(!event.is_handled());
        assert_eq!(take(&log), ["a:WindowClose"]);
    }

    #[test]
    fn close_before_run_means_no_updates() {
        let log = log();
        let frames = Rc::new(RefCell::new(0u64));
        let counter = frames.clone();
        let window = headless().with_script(move |_| {
            *counter.borrow_mut() += 1;
            Vec::new()
        });

        let mut app = app_with(window);
        app.push_layer(Probe::new("a", &log));
        app.on_event(&mut Event::new(WindowCloseEvent));
        take(&log);

        app.run();

        assert!(take(&log).iter().all(|entry| !entry.ends_with(":update")));
        assert_eq!(*frames.borrow(), 0);
    }

    #[test]
    fn close_during_pump_skips_that_frames_updates() {
        let log = log();
        let window = headless().with_script(|frame| match frame {
            2 => vec![Event::new(WindowCloseEvent)],
            _ => Vec::new(),
        });

        let mut app = app_with(window);
        app.push_layer(Probe::new("a", &log));
        take(&log);

        app.run();

        let updates = take(&log).iter().filter(|e| *e == "a:update").count();
        assert_eq!(updates, 2);
        assert_eq!(app.state(), AppState::Stopped);
    }

    // ── frame loop ────────────────────────────────────────────────────────

    #[test]
    fn update_runs_front_to_back() {
        let log = log();
        let window = headless().with_script(|frame| match frame {
            1 => vec![Event::new(WindowCloseEvent)],
            _ => Vec::new(),
        });

        let mut app = app_with(window);
        app.push_overlay(Probe::new("hud", &log));
        app.push_layer(Probe::new("world", &log));
        app.push_layer(Probe::new("ui", &log));
        take(&log);

        app.run();

        let updates: Vec<String> = take(&log)
            .into_iter()
            .filter(|e| e.ends_with(":update"))
            .collect();
        assert_eq!(updates, ["world:update", "ui:update", "hud:update"]);
    }

    #[test]
    fn pumped_events_route_through_layers_in_order() {
        let log = log();
        let window = headless().with_script(|frame| match frame {
            0 => vec![
                Event::new(MouseButtonPressEvent::new(MouseButton::Left)),
                Event::new(KeyPressEvent::new(KeyCode::Space, 0)),
            ],
            _ => vec![Event::new(WindowCloseEvent)],
        });

        let mut app = app_with(window);
        app.push_layer(Probe::new("a", &log));
        take(&log);

        app.run();

        assert_eq!(
            take(&log),
            ["a:MousePress", "a:KeyPress", "a:update", "a:WindowClose"]
        );
    }

    #[test]
    fn resize_is_visible_to_layers() {
        struct SizeProbe(Rc<RefCell<Vec<(u32, u32)>>>);
        impl Layer for SizeProbe {
            fn update(&mut self, ctx: &mut LayerCtx<'_>) {
                self.0.borrow_mut().push((ctx.window.width, ctx.window.height));
            }
        }

        let sizes = Rc::new(RefCell::new(Vec::new()));
        let window = headless().with_script(|frame| match frame {
            0 => vec![Event::new(WindowResizeEvent::new(800, 600))],
            _ => vec![Event::new(WindowCloseEvent)],
        });

        let mut app = app_with(window);
        app.push_layer(SizeProbe(sizes.clone()));
        app.run();

        assert_eq!(*sizes.borrow(), [(800, 600)]);
        assert_eq!((app.window().width(), app.window().height()), (800, 600));
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn push_attaches_and_pop_detaches_once() {
        let log = log();
        let mut app = app();
        let a = app.push_layer(Probe::new("a", &log));
        let c = app.push_overlay(Probe::new("c", &log));

        assert!(app.pop_layer(a));
        assert!(!app.pop_layer(a));
        assert!(!app.pop_layer(c));
        assert!(app.pop_overlay(c));

        assert_eq!(take(&log), ["a:attach", "c:attach", "a:detach", "c:detach"]);
        assert!(app.layers().is_empty());
    }

    #[test]
    fn drop_detaches_resident_layers_top_down() {
        let log = log();
        {
            let mut app = app();
            app.push_layer(Probe::new("a", &log));
            app.push_layer(Probe::new("b", &log));
            app.push_overlay(Probe::new("c", &log));
            take(&log);
        }
        assert_eq!(take(&log), ["c:detach", "b:detach", "a:detach"]);
    }

    // ── deferred requests ─────────────────────────────────────────────────

    #[test]
    fn pushes_from_hooks_apply_after_the_pass() {
        struct Spawner {
            log: Log,
            spawned: bool,
        }
        impl Layer for Spawner {
            fn name(&self) -> &str {
                "spawner"
            }
            fn update(&mut self, ctx: &mut LayerCtx<'_>) {
                self.log.borrow_mut().push("spawner:update".into());
                if !self.spawned {
                    self.spawned = true;
                    ctx.push_overlay(Probe::new("child", &self.log));
                }
            }
        }

        let log = log();
        let window = headless().with_script(|frame| match frame {
            2 => vec![Event::new(WindowCloseEvent)],
            _ => Vec::new(),
        });

        let mut app = app_with(window);
        app.push_layer(Spawner {
            log: log.clone(),
            spawned: false,
        });
        app.run();

        assert_eq!(
            take(&log),
            [
                "spawner:update",
                "child:attach",
                "spawner:update",
                "child:update",
                "child:WindowClose",
            ]
        );
        drop(app);
        assert_eq!(take(&log), ["child:detach"]);
    }

    #[test]
    fn pop_from_event_hook_is_deferred() {
        struct SelfRemoving {
            id: Rc<RefCell<Option<LayerId>>>,
            log: Log,
        }
        impl Layer for SelfRemoving {
            fn on_event(&mut self, _event: &mut Event, ctx: &mut LayerCtx<'_>) {
                self.log.borrow_mut().push("remover:event".into());
                if let Some(id) = *self.id.borrow() {
                    ctx.pop_overlay(id);
                }
            }
            fn on_detach(&mut self) {
                self.log.borrow_mut().push("remover:detach".into());
            }
        }

        let log = log();
        let slot = Rc::new(RefCell::new(None));
        let mut app = app();
        app.push_layer(Probe::new("a", &log));
        let id = app.push_overlay(SelfRemoving {
            id: slot.clone(),
            log: log.clone(),
        });
        *slot.borrow_mut() = Some(id);
        take(&log);

        app.on_event(&mut Event::new(MouseMoveEvent::new(1.0, 1.0)));
        app.on_event(&mut Event::new(MouseMoveEvent::new(2.0, 2.0)));

        assert_eq!(
            take(&log),
            ["remover:event", "a:MouseMove", "remover:detach", "a:MouseMove"]
        );
        assert_eq!(app.layers().len(), 1);
    }

    #[test]
    fn exit_from_update_stops_loop() {
        struct Quitter(u32);
        impl Layer for Quitter {
            fn update(&mut self, ctx: &mut LayerCtx<'_>) {
                self.0 += 1;
                if self.0 == 3 {
                    ctx.exit();
                }
            }
        }

        let frames = Rc::new(RefCell::new(0u64));
        let counter = frames.clone();
        let window = headless().with_script(move |_| {
            *counter.borrow_mut() += 1;
            Vec::new()
        });

        let mut app = app_with(window);
        app.push_layer(Quitter(0));
        app.run();

        assert_eq!(app.state(), AppState::Stopped);
        assert_eq!(*frames.borrow(), 3);
    }

    #[test]
    fn stop_is_terminal() {
        let mut app = app();
        app.stop();
        app.on_event(&mut Event::new(KeyPressEvent::new(KeyCode::Enter, 0)));
        assert_eq!(app.state(), AppState::Stopped);
    }
}
