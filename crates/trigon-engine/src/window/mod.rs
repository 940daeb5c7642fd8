//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single Window, and wires them to the GPU layer.

mod error;
mod runtime;

pub use error::StartupError;
pub use runtime::{Runtime, RuntimeConfig};
