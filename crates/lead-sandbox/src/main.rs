use std::process::ExitCode;

use lead_engine::event::{
    Event, EventCategory, EventDispatcher, KeyCode, KeyPressEvent, WindowResizeEvent,
};
use lead_engine::{entry, App, Layer, LayerCtx, LoggingConfig, WindowConfig};

/// Logs every frame and every event it sees.
struct ExampleLayer;

impl Layer for ExampleLayer {
    fn name(&self) -> &str {
        "Example"
    }

    fn update(&mut self, ctx: &mut LayerCtx<'_>) {
        if ctx.time.frame_index % 600 == 0 {
            log::info!(
                logger: ctx.logger(),
                "frame {} ({:.2} ms)",
                ctx.time.frame_index,
                ctx.time.dt * 1000.0
            );
        }
    }

    fn on_event(&mut self, event: &mut Event, ctx: &mut LayerCtx<'_>) {
        log::trace!(logger: ctx.logger(), "{event}");
    }
}

/// Top-most overlay: Escape quits, resizes are reported.
struct ControlsOverlay;

impl Layer for ControlsOverlay {
    fn name(&self) -> &str {
        "Controls"
    }

    fn on_event(&mut self, event: &mut Event, ctx: &mut LayerCtx<'_>) {
        if !event.in_category(EventCategory::KEYBOARD | EventCategory::APP) {
            return;
        }

        let mut quit = false;
        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch::<KeyPressEvent, _>(|e| {
            quit = e.key == KeyCode::Escape;
            quit
        });
        dispatcher.dispatch::<WindowResizeEvent, _>(|e| {
            log::info!(logger: ctx.logger(), "resized to {}x{}", e.width, e.height);
            false
        });

        if quit {
            ctx.exit();
        }
    }
}

fn main() -> ExitCode {
    entry::run(LoggingConfig::default(), |logger| {
        let mut app = App::new(WindowConfig::new("Sandbox", 1280, 720), logger.clone())?;
        app.push_layer(ExampleLayer);
        app.push_overlay(ControlsOverlay);
        log::info!(logger: logger, "Esc to quit");
        Ok(app)
    })
}
