//! winit-backed platform.
//!
//! Owns the `winit` EventLoop, the Window and the GPU context bound to it, and
//! exposes them through the shell's [`Platform`](crate::shell::Platform) /
//! [`Surface`](crate::shell::Surface) seam. Events are pumped synchronously
//! from `should_close`, so the loop itself stays a plain `while`.

mod entry;
mod handler;
mod platform;
mod surface;

pub use platform::WinitPlatform;
pub use surface::WinitSurface;

pub use winit::keyboard::KeyCode;

#[cfg(target_os = "android")]
pub use winit::platform::android::activity::AndroidApp;
