use anyhow::{Context, Result};

use super::{FrameStatus, Platform, ShellConfig, Surface};
use crate::paint::Color;
use crate::time::FrameClock;

/// Lifecycle state of a [`Shell`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShellState {
    /// No window exists yet (or initialization failed).
    Uninitialized,
    /// The window/context handle is live and frames are being drawn.
    Running,
    /// The handle has been released; the shell cannot run again.
    Terminated,
}

/// Totals reported after the loop exits.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Frames cleared and presented.
    pub frames: u64,
    /// Iterations where no back buffer was available.
    pub skipped: u64,
    /// Mean presented-frame time in seconds.
    pub mean_frame_time: f32,
}

/// Drives one window through its whole lifecycle.
#[derive(Debug)]
pub struct Shell {
    config: ShellConfig,
    state: ShellState,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            state: ShellState::Uninitialized,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Opens the window, runs frames until a close request, then releases the
    /// window.
    ///
    /// - Initialization failure returns the error and leaves the shell
    ///   `Uninitialized`; `shutdown` is never called.
    /// - Once initialized, `shutdown` runs exactly once on every exit path,
    ///   including errors and panics inside the loop.
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> Result<RunSummary> {
        anyhow::ensure!(
            self.state == ShellState::Uninitialized,
            "shell cannot run from state {:?}",
            self.state
        );

        let window = &self.config.window;
        let surface = platform.initialize(window).with_context(|| {
            format!(
                "failed to initialize window \"{}\" ({}x{})",
                window.title, window.width, window.height
            )
        })?;

        self.transition(ShellState::Running);

        let mut clock = FrameClock::new();
        let mut skipped = 0u64;

        let mut guard = ShutdownGuard::new(surface);
        let result = drive(
            guard.surface_mut(),
            self.config.clear_color,
            &mut clock,
            &mut skipped,
        );
        drop(guard);

        self.transition(ShellState::Terminated);

        let summary = RunSummary {
            frames: clock.frames(),
            skipped,
            mean_frame_time: clock.mean_dt(),
        };
        log::info!(
            "presented {} frames ({} skipped), mean frame time {:.2} ms",
            summary.frames,
            summary.skipped,
            summary.mean_frame_time * 1000.0
        );

        result.map(|()| summary)
    }

    fn transition(&mut self, to: ShellState) {
        log::debug!("shell: {:?} -> {:?}", self.state, to);
        self.state = to;
    }
}

fn drive<S: Surface>(
    surface: &mut S,
    clear: Color,
    clock: &mut FrameClock,
    skipped: &mut u64,
) -> Result<()> {
    while !surface.should_close() {
        match surface.begin_frame()? {
            FrameStatus::Ready => {
                surface.clear(clear);
                surface.end_frame();

                let ft = clock.tick();
                log::trace!("frame {} dt {:.3} ms", ft.frame_index, ft.dt * 1000.0);
            }
            FrameStatus::Skipped => {
                *skipped += 1;
                clock.reset();
            }
        }
    }

    log::info!("close requested");
    Ok(())
}

/// Releases the surface when dropped.
struct ShutdownGuard<S: Surface>(Option<S>);

impl<S: Surface> ShutdownGuard<S> {
    fn new(surface: S) -> Self {
        Self(Some(surface))
    }

    /// The slot is emptied only by `drop`, so it is always filled here.
    fn surface_mut(&mut self) -> &mut S {
        self.0
            .as_mut()
            .expect("surface is only taken when the guard drops")
    }
}

impl<S: Surface> Drop for ShutdownGuard<S> {
    fn drop(&mut self) {
        if let Some(surface) = self.0.take() {
            surface.shutdown();
        }
    }
}
