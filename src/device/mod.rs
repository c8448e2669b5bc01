//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain) and depth buffer
//! - acquiring frames and providing encoders/views for rendering

mod error;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::DEPTH_FORMAT;
