//! Colors used for clearing and filling.

mod color;

pub use color::Color;
