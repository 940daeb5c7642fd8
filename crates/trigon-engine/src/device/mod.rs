//! GPU device + surface management.
//!
//! This module is responsible for:
//! - resolving a graphics backend and adapter for a window
//! - creating the Device/Queue (the active graphics context)
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
