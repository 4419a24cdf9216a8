//! Application shell.
//!
//! Owns the window/context lifecycle and drives the frame loop:
//!
//! ```text
//! Uninitialized --initialize--> Running --should_close--> Terminated
//! ```
//!
//! The shell is generic over [`Platform`] so the loop can run against the
//! winit backend (`crate::window`) or an in-memory double in tests.

mod config;
mod platform;
mod run;

#[cfg(test)]
mod scripted;

pub use config::{ShellConfig, WindowConfig};
pub use platform::{FrameStatus, Platform, Surface};
pub use run::{RunSummary, Shell, ShellState};
