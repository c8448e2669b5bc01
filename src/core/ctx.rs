use winit::window::Window;

use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::time::FrameTime;

use super::app::AppControl;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires a frame, lets `draw` record into it, then presents.
    ///
    /// Transient surface errors skip or reconfigure and the loop continues;
    /// a fatal surface error exits.
    pub fn render<F>(&mut self, draw: F) -> AppControl
    where
        F: FnOnce(&Gpu<'w>, &mut GpuFrame),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::warn!("surface frame acquisition failed: {err}");
                let action = self.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        draw(self.gpu, &mut frame);

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
