use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug)]
pub enum AppControl {
    Continue,
    /// Stop the loop without an error (window closed, demo finished).
    Exit,
    /// Stop the loop with a fatal error.
    ///
    /// The error propagates out of `Runtime::run` so the process exits
    /// nonzero; the runtime does not log it separately.
    Fail(anyhow::Error),
}

/// Application contract implemented by the demo binaries.
pub trait App {
    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
