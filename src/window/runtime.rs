use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
        }
    }
}

/// Entry point for the runtime.
///
/// Drives a single window with continuous redraws until the window is closed
/// or the app requests exit. Initialization failures (no adapter, shader
/// compile/link errors reported from `on_frame`) terminate the loop; the
/// error is surfaced once from [`Runtime::run`].
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        if let Some(err) = state.fatal {
            return Err(err);
        }

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,
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
            exit_requested: false,
            fatal: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Applies an app control directive; returns true when the loop should
    /// stop. A `Fail` error is stored for `Runtime::run` to return.
    fn handle_control(&mut self, control: AppControl) -> bool {
        match control {
            AppControl::Continue => false,
            AppControl::Exit => {
                self.request_exit();
                true
            }
            AppControl::Fail(err) => {
                self.fatal = Some(err);
                self.request_exit();
                true
            }
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("failed to initialize the rendering context")?;

        self.entry = Some(entry);
        Ok(())
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            // Surfaced once, from `Runtime::run`'s return value.
            self.fatal = Some(e);
            self.request_exit();
            event_loop.exit();
            return;
        }

        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Animated demos redraw continuously; the loop has no stop condition
        // beyond window close.
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.request_exit();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_mut(|fields| {
                        fields.gpu.resize(*new_size);
                        // Rebase the clock so the reconfigure stall does not
                        // land in the next frame's delta.
                        fields.clock.reset();
                    });
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_mut(|fields| {
                        fields.gpu.resize(new_size);
                        fields.clock.reset();
                    });
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                let mut app_control = AppControl::Continue;

                // Split borrows to avoid `self` capture inside `ouroboros` closures.
                let (app, entry) = (&mut self.app, &mut self.entry);

                if let Some(entry) = entry.as_mut() {
                    entry.with_mut(|fields| {
                        let time = fields.clock.tick();

                        let mut ctx = FrameCtx {
                            window: fields.window,
                            gpu: fields.gpu,
                            time,
                        };

                        app_control = app.on_frame(&mut ctx);
                    });
                }

                if self.handle_control(app_control) {
                    event_loop.exit();
                }
            }

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopApp;

    impl CoreApp for NoopApp {
        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> AppControl {
            AppControl::Continue
        }
    }

    fn state() -> AppState<NoopApp> {
        AppState::new(RuntimeConfig::default(), GpuInit::default(), NoopApp)
    }

    #[test]
    fn continue_keeps_the_loop_running() {
        let mut s = state();
        assert!(!s.handle_control(AppControl::Continue));
        assert!(!s.exit_requested);
        assert!(s.fatal.is_none());
    }

    #[test]
    fn exit_stops_the_loop_without_an_error() {
        let mut s = state();
        assert!(s.handle_control(AppControl::Exit));
        assert!(s.exit_requested);
        assert!(s.fatal.is_none());
    }

    #[test]
    fn fail_stores_the_error_for_run_to_return() {
        let mut s = state();
        assert!(s.handle_control(AppControl::Fail(anyhow::anyhow!("shader rejected"))));
        assert!(s.exit_requested);
        assert!(s.fatal.is_some());
    }
}
