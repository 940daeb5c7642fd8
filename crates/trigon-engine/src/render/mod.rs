//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers), create them lazily
//! on first use and record draws into the frame's encoder.
//!
//! Convention: vertex positions are already in NDC; shaders pass them through.

mod ctx;
mod stats;
pub mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use stats::{DrawCall, FrameStats};
