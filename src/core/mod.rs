//! Contract between the window runtime and the demo applications.
//!
//! The runtime drives the platform loop; demos implement [`App`] and receive
//! a [`FrameCtx`] once per redraw.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
