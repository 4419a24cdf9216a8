//! rayclear application.
//!
//! Opens a 480x480 window titled "raylib-android", clears it to an off-white
//! every frame until closed, and exits. The desktop binary and the Android
//! activity entry point share [`run`].

use anyhow::Result;

use rayclear_engine::logging::LoggingConfig;
use rayclear_engine::shell::Platform;
use rayclear_engine::{Color, RAYWHITE, RunSummary, Shell, ShellConfig, WindowConfig};

pub const WINDOW_TITLE: &str = "raylib-android";
pub const WINDOW_WIDTH: u32 = 480;
pub const WINDOW_HEIGHT: u32 = 480;
pub const BACKGROUND: Color = RAYWHITE;

pub fn shell_config() -> ShellConfig {
    ShellConfig {
        window: WindowConfig::new(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT),
        clear_color: BACKGROUND,
    }
}

pub fn logging_config() -> LoggingConfig {
    LoggingConfig::default()
}

/// Runs one shell lifecycle on `platform`.
pub fn run<P: Platform>(platform: &mut P) -> Result<RunSummary> {
    Shell::new(shell_config()).run(platform)
}

#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
fn android_main(app: rayclear_engine::window::AndroidApp) {
    use rayclear_engine::device::GpuInit;
    use rayclear_engine::logging::init_logging;
    use rayclear_engine::window::WinitPlatform;

    init_logging(logging_config());

    let mut platform = WinitPlatform::android(app, GpuInit::default());
    if let Err(e) = run(&mut platform) {
        log::error!("{e:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayclear_engine::shell::{FrameStatus, Surface};

    /// Records the window it was asked for and closes on the first poll.
    #[derive(Default)]
    struct ClosedAtOnce {
        requested: Option<WindowConfig>,
    }

    struct Noop;

    impl Platform for ClosedAtOnce {
        type Surface = Noop;

        fn initialize(&mut self, config: &WindowConfig) -> Result<Noop> {
            self.requested = Some(config.clone());
            Ok(Noop)
        }
    }

    impl Surface for Noop {
        fn should_close(&mut self) -> bool {
            true
        }
        fn begin_frame(&mut self) -> Result<FrameStatus> {
            panic!("no frame expected");
        }
        fn clear(&mut self, _color: Color) {}
        fn end_frame(&mut self) {}
        fn shutdown(self) {}
    }

    #[test]
    fn config_is_fixed() {
        let cfg = shell_config();
        assert_eq!(cfg.window, WindowConfig::new("raylib-android", 480, 480));
        assert_eq!(cfg.clear_color.to_srgb_u8(), [245, 245, 245, 255]);
    }

    #[test]
    fn run_opens_fixed_window_and_exits_cleanly() {
        let mut platform = ClosedAtOnce::default();

        let summary = run(&mut platform).unwrap();

        assert_eq!(summary.frames, 0);
        assert_eq!(platform.requested, Some(shell_config().window));
    }
}
