//! Frame timing.
//!
//! One `FrameClock` per render loop; call `tick()` once per presented frame
//! to obtain the elapsed-time delta driving the animation.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
