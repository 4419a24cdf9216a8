use anyhow::{Context, Result};
use winit::event_loop::EventLoop;
use winit::keyboard::KeyCode;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

#[cfg(target_os = "android")]
use winit::platform::android::activity::AndroidApp;

use super::handler::Handler;
use super::surface::WinitSurface;
use crate::device::GpuInit;
use crate::shell::{Platform, WindowConfig};

/// Opens a winit window with a wgpu context.
pub struct WinitPlatform {
    gpu_init: GpuInit,
    exit_key: Option<KeyCode>,

    #[cfg(target_os = "android")]
    android_app: Option<AndroidApp>,
}

impl WinitPlatform {
    pub fn new(gpu_init: GpuInit) -> Self {
        Self {
            gpu_init,
            exit_key: Some(KeyCode::Escape),
            #[cfg(target_os = "android")]
            android_app: None,
        }
    }

    /// Platform bound to the activity handed to `android_main`.
    #[cfg(target_os = "android")]
    pub fn android(app: AndroidApp, gpu_init: GpuInit) -> Self {
        Self {
            android_app: Some(app),
            ..Self::new(gpu_init)
        }
    }

    /// Key that raises a close request when pressed. `None` disables it.
    pub fn with_exit_key(mut self, key: Option<KeyCode>) -> Self {
        self.exit_key = key;
        self
    }

    #[cfg(not(target_os = "android"))]
    fn build_event_loop(&mut self) -> Result<EventLoop<()>> {
        EventLoop::new().context("failed to create winit EventLoop")
    }

    #[cfg(target_os = "android")]
    fn build_event_loop(&mut self) -> Result<EventLoop<()>> {
        use winit::platform::android::EventLoopBuilderExtAndroid;

        let app = self
            .android_app
            .take()
            .context("android platform already consumed its activity")?;

        EventLoop::builder()
            .with_android_app(app)
            .build()
            .context("failed to create winit EventLoop")
    }
}

impl Default for WinitPlatform {
    fn default() -> Self {
        Self::new(GpuInit::default())
    }
}

impl Platform for WinitPlatform {
    type Surface = WinitSurface;

    fn initialize(&mut self, config: &WindowConfig) -> Result<WinitSurface> {
        let mut event_loop = self.build_event_loop()?;
        let mut handler = Handler::new(config.clone(), self.gpu_init.clone(), self.exit_key);

        // Desktop backends deliver `resumed` on the first pump; Android only
        // once the activity has a native window. Block until either happens.
        while handler.entry.is_none() {
            let status = event_loop.pump_app_events(None, &mut handler);

            if let Some(err) = handler.init_error.take() {
                return Err(err);
            }
            if let PumpStatus::Exit(code) = status {
                anyhow::bail!("event loop exited with code {code} before the window was created");
            }
            if handler.close_requested {
                anyhow::bail!("close requested before the window was created");
            }
        }

        Ok(WinitSurface::new(event_loop, handler))
    }
}
