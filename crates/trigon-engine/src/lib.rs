//! Trigon engine crate.
//!
//! Platform + GPU runtime for a single window drawing a static triangle:
//! window and event loop (`window`), graphics context (`device`), the app
//! contract (`core`) and the triangle's geometry and renderer.

pub mod core;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
