//! CPU-side geometry uploaded to the GPU.
//!
//! Positions are in normalized device coordinates: `[-1, 1]` on x and y,
//! origin at the window center, +Y up.

mod triangle;
mod vertex;

pub use triangle::{EQUILATERAL_TRIANGLE, SQRT_3, TRIANGLE_VERTEX_COUNT};
pub use vertex::Vertex;
