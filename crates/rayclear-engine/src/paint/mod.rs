//! Color model shared between the shell and the GPU layer.
//!
//! Colors are premultiplied sRGB; linearization happens when a clear value
//! is handed to a render pass.

pub mod color;

pub use color::{Color, RAYWHITE, linear_to_srgb, srgb_to_linear};
