use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use ouroboros::self_referencing;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as NativeWindow, WindowId};

use crate::device::{present_mode_for, Gpu, GpuInit, SurfaceErrorAction};
use crate::event::{Event, WindowCloseEvent};
use crate::logging::Logger;

use super::contract::{EventCallback, Window, WindowConfig};
use super::translate::translate_window_event;

/// Desktop window backed by `winit`, presenting through `wgpu`.
///
/// The event loop is never handed control; each [`Window::update`] pumps
/// whatever the platform has queued and returns.
pub struct WinitWindow {
    event_loop: EventLoop<()>,
    shell: Shell,
}

#[self_referencing]
struct Surface {
    window: NativeWindow,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Window state shared between `update` and the pump handler.
struct Shell {
    data: WindowConfig,
    gpu_init: GpuInit,
    surface: Option<Surface>,
    create_error: Option<anyhow::Error>,
    closed: bool,
    logger: Logger,
}

/// `ApplicationHandler` for one pump: routes translated events straight to
/// the caller's callback.
struct Pump<'a, 'c> {
    shell: &'a mut Shell,
    callback: &'a mut (dyn EventCallback + 'c),
}

impl WinitWindow {
    /// Opens the native window and its GPU surface.
    ///
    /// Events the platform reports while the window is being created are
    /// dropped; nothing is listening yet.
    pub fn create(config: WindowConfig, gpu_init: GpuInit, logger: Logger) -> Result<Self> {
        log::info!(
            logger: logger,
            "creating window {} ({}, {})",
            config.title,
            config.width,
            config.height
        );

        let mut event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut shell = Shell {
            data: config,
            gpu_init,
            surface: None,
            create_error: None,
            closed: false,
            logger,
        };

        // Windows can only be created from `resumed`, which arrives on a pump.
        let mut discard = |_: &mut Event| {};
        while shell.surface.is_none() {
            let mut pump = Pump {
                shell: &mut shell,
                callback: &mut discard,
            };
            let status = event_loop.pump_app_events(Some(Duration::from_millis(16)), &mut pump);

            if let Some(err) = shell.create_error.take() {
                return Err(err);
            }
            if let PumpStatus::Exit(code) = status {
                return Err(anyhow!(
                    "event loop exited with code {code} before the window was created"
                ));
            }
        }

        Ok(Self { event_loop, shell })
    }
}

impl Window for WinitWindow {
    fn update(&mut self, callback: &mut dyn EventCallback) {
        self.shell.present(callback);

        let status = {
            let mut pump = Pump {
                shell: &mut self.shell,
                callback: &mut *callback,
            };
            self.event_loop
                .pump_app_events(Some(Duration::ZERO), &mut pump)
        };

        if let PumpStatus::Exit(code) = status {
            log::warn!(logger: self.shell.logger, "event loop exited with code {code}");
            self.shell.close(callback);
        }
    }

    fn width(&self) -> u32 {
        self.shell.data.width
    }

    fn height(&self) -> u32 {
        self.shell.data.height
    }

    fn title(&self) -> &str {
        &self.shell.data.title
    }

    fn set_vsync(&mut self, enabled: bool) {
        self.shell.data.vsync = enabled;
        if let Some(surface) = self.shell.surface.as_mut() {
            surface.with_gpu_mut(|gpu| gpu.set_present_mode(present_mode_for(enabled)));
        }
        log::debug!(logger: self.shell.logger, "vsync {}", if enabled { "on" } else { "off" });
    }

    fn is_vsync(&self) -> bool {
        self.shell.data.vsync
    }
}

impl Shell {
    fn create_surface(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = NativeWindow::default_attributes()
            .with_title(self.data.title.clone())
            .with_inner_size(PhysicalSize::new(self.data.width, self.data.height));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let size = window.inner_size();
        self.data.width = size.width;
        self.data.height = size.height;

        let gpu_init = self.gpu_init.clone();
        let present_mode = present_mode_for(self.data.vsync);

        let surface = SurfaceTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, &gpu_init, present_mode)),
        }
        .try_build()
        .context("failed to initialize GPU for window")?;

        self.surface = Some(surface);
        Ok(())
    }

    /// Clears and presents one frame. A fatal surface error closes the window.
    fn present(&mut self, callback: &mut dyn EventCallback) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let outcome = surface.with_mut(|fields| {
            let mut frame = match fields.gpu.begin_frame() {
                Ok(frame) => frame,
                Err(err) => return Some(fields.gpu.handle_surface_error(err)),
            };

            fields.gpu.clear(&mut frame);
            fields.window.pre_present_notify();
            fields.gpu.submit(frame);
            None
        });

        match outcome {
            Some(SurfaceErrorAction::Fatal) => {
                log::error!(logger: self.logger, "surface lost beyond recovery; closing window");
                self.close(callback);
            }
            Some(action) => log::debug!(logger: self.logger, "frame skipped: {action:?}"),
            None => {}
        }
    }

    /// Delivers a single synthetic close.
    fn close(&mut self, callback: &mut dyn EventCallback) {
        if self.closed {
            return;
        }
        self.closed = true;
        callback.on_event(&mut Event::new(WindowCloseEvent));
    }

    fn handle(&mut self, event: WindowEvent, callback: &mut dyn EventCallback) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        match &event {
            WindowEvent::Resized(size) => {
                self.data.width = size.width;
                self.data.height = size.height;
                surface.with_gpu_mut(|gpu| gpu.resize(*size));
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = surface.with_window(|w| w.inner_size());
                surface.with_gpu_mut(|gpu| gpu.resize(size));
            }
            WindowEvent::CloseRequested => self.closed = true,
            _ => {}
        }

        let translated = surface.with_window(|w| translate_window_event(w, &event));
        if let Some(mut event) = translated {
            callback.on_event(&mut event);
        }
    }
}

impl ApplicationHandler for Pump<'_, '_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.shell.surface.is_some() {
            return;
        }

        if let Err(err) = self.shell.create_surface(event_loop) {
            log::error!(logger: self.shell.logger, "failed to create window: {err:#}");
            self.shell.create_error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.shell.handle(event, &mut *self.callback);
    }
}
