//! rayclear engine crate.
//!
//! Window lifecycle and frame loop for a clear-and-present smoke test:
//! the [`shell`] drives any [`shell::Platform`]; [`window`] provides the
//! winit + wgpu one.

pub mod device;
pub mod logging;
pub mod paint;
pub mod shell;
pub mod time;
pub mod window;

pub use paint::{Color, RAYWHITE};
pub use shell::{RunSummary, Shell, ShellConfig, WindowConfig};
