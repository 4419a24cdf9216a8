use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use super::entry::WindowEntry;
use crate::device::GpuInit;
use crate::shell::WindowConfig;

/// Receives pumped winit events and tracks what the shell needs to know.
pub(super) struct Handler {
    config: WindowConfig,
    gpu_init: GpuInit,
    exit_key: Option<KeyCode>,

    /// `None` before the first `resumed` and while suspended (Android).
    pub(super) entry: Option<WindowEntry>,
    /// First creation failure; taken by `initialize`.
    pub(super) init_error: Option<anyhow::Error>,
    pub(super) close_requested: bool,
    created_once: bool,
}

impl Handler {
    pub(super) fn new(config: WindowConfig, gpu_init: GpuInit, exit_key: Option<KeyCode>) -> Self {
        Self {
            config,
            gpu_init,
            exit_key,
            entry: None,
            init_error: None,
            close_requested: false,
            created_once: false,
        }
    }

    fn request_close(&mut self, reason: &str) {
        if !self.close_requested {
            log::info!("close requested: {reason}");
        }
        self.close_requested = true;
    }

    fn create_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.width),
                f64::from(self.config.height),
            ))
            .with_resizable(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        WindowEntry::create(window, self.gpu_init.clone())
    }
}

impl ApplicationHandler for Handler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_entry(event_loop) {
            Ok(entry) => {
                let size = entry.physical_size();
                log::info!(
                    "window \"{}\" ready ({}x{} physical)",
                    self.config.title,
                    size.width,
                    size.height
                );
                self.entry = Some(entry);
                self.created_once = true;
            }
            Err(e) if self.created_once => {
                log::error!("failed to recreate window after resume: {e:#}");
                self.request_close("window could not be recreated");
            }
            Err(e) => self.init_error = Some(e),
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // The native window is about to go away; the surface must not outlive it.
        if self.entry.take().is_some() {
            log::info!("suspended; window surface released");
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.request_close("window close"),
            WindowEvent::Destroyed => self.request_close("window destroyed"),

            WindowEvent::KeyboardInput { event, .. } => {
                if is_exit_key(event.physical_key, event.state, self.exit_key) {
                    self.request_close("exit key");
                }
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.resize(new_size);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.resize_to_window();
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.request_close("event loop exiting");
    }
}

fn is_exit_key(key: PhysicalKey, state: ElementState, exit_key: Option<KeyCode>) -> bool {
    match (key, exit_key) {
        (PhysicalKey::Code(code), Some(exit)) => state == ElementState::Pressed && code == exit,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_entry_constructor_is_reachable_from_handler() {
        let create: fn(Window, GpuInit) -> Result<WindowEntry> = WindowEntry::create;
        let _ = create;
    }

    #[test]
    fn escape_press_closes() {
        let esc = PhysicalKey::Code(KeyCode::Escape);
        assert!(is_exit_key(esc, ElementState::Pressed, Some(KeyCode::Escape)));
    }

    #[test]
    fn release_does_not_close() {
        let esc = PhysicalKey::Code(KeyCode::Escape);
        assert!(!is_exit_key(esc, ElementState::Released, Some(KeyCode::Escape)));
    }

    #[test]
    fn other_keys_do_not_close() {
        let a = PhysicalKey::Code(KeyCode::KeyA);
        assert!(!is_exit_key(a, ElementState::Pressed, Some(KeyCode::Escape)));
    }

    #[test]
    fn disabled_exit_key_never_closes() {
        let esc = PhysicalKey::Code(KeyCode::Escape);
        assert!(!is_exit_key(esc, ElementState::Pressed, None));
    }
}
