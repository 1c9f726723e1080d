use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, InitCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::{platform, InputState};
use crate::overlay::Overlay;
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "fractal".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            resizable: true,
        }
    }
}

/// Lifecycle of the render loop.
///
/// `ShuttingDown` is terminal: no more frames are driven once it is entered.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    ShuttingDown,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until the window closes.
    ///
    /// Initialization failures (window, GPU, `App::on_init`) are returned as
    /// the error of this call after the loop has stopped.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// GPU-side resources bound to the window's lifetime.
struct Graphics<'w> {
    gpu: Gpu<'w>,
    overlay: Overlay,
}

#[self_referencing]
struct WindowEntry {
    input: InputState,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    graphics: Graphics<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    state: LoopState,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            state: LoopState::Running,
            fatal: None,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            input: InputState::default(),
            clock: FrameClock::default(),
            window,
            graphics_builder: |w| {
                let gpu = pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed")?;
                let overlay = Overlay::new(w, &gpu);
                Ok::<_, anyhow::Error>(Graphics { gpu, overlay })
            },
        }
        .try_build()?;

        let size = entry.borrow_window().inner_size();
        log::info!(
            "window \"{}\" created ({}x{} physical)",
            self.config.title,
            size.width,
            size.height
        );

        Ok(entry)
    }

    /// Records a fatal error (first one wins) and shuts the loop down.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.shut_down(event_loop);
    }

    /// Enters `ShuttingDown`: the app releases its resources, then the window
    /// and GPU context are dropped.
    fn shut_down(&mut self, event_loop: &ActiveEventLoop) {
        if self.state == LoopState::Running {
            self.state = LoopState::ShuttingDown;
            log::info!("shutting down");
            self.app.on_shutdown();
            self.entry = None;
        }
        event_loop.exit();
    }

    fn drive_frame(&mut self, window_id: WindowId) -> AppControl {
        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else {
            return AppControl::Continue;
        };

        entry.with_mut(|fields| {
            let time = fields.clock.tick();
            let clock = fields.clock;
            let Graphics { gpu, overlay } = fields.graphics;

            // UI input for this frame is taken before the app samples anything.
            overlay.begin_pass(fields.window);

            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: fields.window,
                },
                gpu,
                overlay,
                input: fields.input,
                time,
                clock,
            };

            app.on_frame(&mut ctx)
        })
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.state == LoopState::ShuttingDown {
            return;
        }

        let entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(e) => {
                self.fail(event_loop, e.context("failed to create initial window"));
                return;
            }
        };

        let id = entry.borrow_window().id();
        let init = entry.with(|fields| {
            let ctx = InitCtx {
                window: WindowCtx {
                    id,
                    window: fields.window,
                },
                gpu: &fields.graphics.gpu,
            };
            self.app.on_init(&ctx)
        });

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);

        if let Err(e) = init {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.state == LoopState::ShuttingDown {
            event_loop.exit();
            return;
        }

        // Continuous redraw; presentation (FIFO) paces the loop.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.state == LoopState::ShuttingDown {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        entry.with_mut(|fields| {
            fields
                .graphics
                .overlay
                .on_window_event(fields.window, &event);

            if let Some(ev) = platform::translate_window_event(&event) {
                fields.input.apply_event(&ev);
            }
        });

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.shut_down(event_loop);
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested");
                self.shut_down(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                log::debug!("surface resized to {}x{}", new_size.width, new_size.height);
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_graphics_mut(|g| g.gpu.resize(*new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_graphics_mut(|g| g.gpu.resize(new_size));
                }
            }

            WindowEvent::RedrawRequested => {
                if self.drive_frame(window_id) == AppControl::Exit {
                    self.shut_down(event_loop);
                }
            }

            _ => {}
        }
    }
}
