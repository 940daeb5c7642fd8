use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::core::{App, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};

use super::StartupError;

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            initial_size: LogicalSize::new(800.0, 800.0),
            resizable: true,
        }
    }
}

impl RuntimeConfig {
    pub fn window_attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.initial_size)
            .with_resizable(self.resizable)
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, drives `app` until the window is closed, then tears
    /// everything down.
    ///
    /// Startup failures carry a [`StartupError`] context. Returns `Ok` after a
    /// normal close.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        Self::check_context_hints(&gpu_init)?;

        let event_loop = EventLoop::new().context(StartupError::Window)?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        if let Some(err) = state.failure.take() {
            return Err(err);
        }

        log::info!(
            "closed after {} presented frames ({} iterations)",
            state.counters.presented,
            state.counters.iterations
        );
        Ok(())
    }

    /// Fails with [`StartupError::Gpu`] when `gpu_init` cannot yield a context.
    ///
    /// Runs before any window is opened; `Gpu::new` repeats the check.
    pub fn check_context_hints(gpu_init: &GpuInit) -> Result<()> {
        gpu_init.validate().context(StartupError::Gpu)
    }
}

/// Turns a frame's fatal-surface flag into the error that ends the run.
fn check_surface(fatal: bool) -> Result<()> {
    anyhow::ensure!(!fatal, "surface failed beyond recovery");
    Ok(())
}

/// Loop iterations versus frames that actually reached the screen.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
struct FrameCounters {
    iterations: u64,
    presented: u64,
}

impl FrameCounters {
    fn record(&mut self, presented: bool) {
        self.iterations += 1;
        if presented {
            self.presented += 1;
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,

    /// The close flag: set by a close request, an app `Exit` or a fatal error.
    should_close: bool,
    counters: FrameCounters,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            should_close: false,
            counters: FrameCounters::default(),
            failure: None,
        }
    }

    /// Records `err` for `Runtime::run` to return and stops the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.failure = Some(err);
        self.should_close = true;
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let window = event_loop
            .create_window(self.config.window_attributes())
            .context(StartupError::Window)?;

        log::info!(
            "window {:?} created ({}x{} physical)",
            self.config.title,
            window.inner_size().width,
            window.inner_size().height
        );

        let gpu_init = self.gpu_init.clone();
        WindowEntry::try_new(window, |w| {
            pollster::block_on(Gpu::new(w, gpu_init)).context(StartupError::Gpu)
        })
    }

    /// Runs one iteration: app frame, stats, close-flag update.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else { return };

        let frame_index = self.counters.presented;
        let (control, stats, presented, fatal) = entry.with_mut(|fields| {
            let mut ctx = FrameCtx::new(fields.window, fields.gpu, frame_index);
            let control = app.on_frame(&mut ctx);
            (control, ctx.stats, ctx.presented, ctx.surface_fatal)
        });

        if presented {
            log::trace!(
                "frame {frame_index}: {} draw call(s), {} vertices",
                stats.draw_calls,
                stats.vertices
            );
        }
        self.counters.record(presented);

        if let Err(err) = check_surface(fatal) {
            self.fail(event_loop, err);
        } else if control == AppControl::Exit {
            log::debug!("app requested exit");
            self.should_close = true;
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.should_close {
            return;
        }

        let mut entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(err) => return self.fail(event_loop, err),
        };

        // Setup, then one clear-only frame before the loop starts.
        let app = &mut self.app;
        let fatal = entry.with_mut(|fields| {
            let mut ctx = FrameCtx::new(fields.window, fields.gpu, 0);
            app.on_start(&ctx.render_ctx());
            let clear = app.clear_color();
            ctx.render(clear, |_, _| {});
            fields.window.request_redraw();
            ctx.surface_fatal
        });

        self.entry = Some(entry);

        if let Err(err) = check_surface(fatal) {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_close {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; FIFO presentation paces the loop.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else { return };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.should_close = true;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.should_close = true;
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
            }

            WindowEvent::RedrawRequested if !self.should_close => self.redraw(event_loop),

            _ => {}
        }

        if self.should_close {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.entry.is_none() {
            return;
        }

        self.app.on_exit();
        // Window and graphics context are destroyed here, after app teardown.
        self.entry = None;
        log::debug!("window and graphics context released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_backends_fail_as_gpu_startup() {
        let init = GpuInit {
            backends: wgpu::Backends::empty(),
            ..GpuInit::default()
        };
        let err = Runtime::check_context_hints(&init).unwrap_err();
        assert_eq!(err.downcast_ref::<StartupError>(), Some(&StartupError::Gpu));
    }

    #[test]
    fn default_hints_pass() {
        assert!(Runtime::check_context_hints(&GpuInit::default()).is_ok());
    }

    #[test]
    fn fatal_surface_is_a_runtime_failure() {
        let err = check_surface(true).unwrap_err();
        assert_eq!(err.to_string(), "surface failed beyond recovery");
        assert!(err.downcast_ref::<StartupError>().is_none());
        assert!(check_surface(false).is_ok());
    }

    #[test]
    fn counters_skip_unpresented_iterations() {
        let mut counters = FrameCounters::default();
        counters.record(true);
        counters.record(false);
        counters.record(true);
        assert_eq!(counters, FrameCounters { iterations: 3, presented: 2 });
    }

    #[test]
    fn default_window_is_800_square() {
        let config = RuntimeConfig::default();
        assert_eq!(config.initial_size, LogicalSize::new(800.0, 800.0));
        assert_eq!(config.title, "trigon");
    }

    #[test]
    fn attributes_carry_config() {
        let config = RuntimeConfig {
            title: "triangle".into(),
            initial_size: LogicalSize::new(640.0, 480.0),
            resizable: false,
        };
        let attrs = config.window_attributes();
        assert_eq!(attrs.title, "triangle");
        assert!(!attrs.resizable);
        assert_eq!(
            attrs.inner_size,
            Some(winit::dpi::Size::Logical(LogicalSize::new(640.0, 480.0)))
        );
    }
}
