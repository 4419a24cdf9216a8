use anyhow::Result;

use super::WindowConfig;
use crate::paint::Color;

/// Outcome of [`Surface::begin_frame`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStatus {
    /// A back buffer is bound; `clear` and `end_frame` must follow.
    Ready,
    /// No back buffer this iteration (surface lost, suspended, timed out).
    /// Nothing is drawn and the loop polls again.
    Skipped,
}

/// Creates the window/context handle.
pub trait Platform {
    type Surface: Surface;

    /// Opens the window and its rendering context.
    ///
    /// An error here is fatal: the shell never enters the running state.
    fn initialize(&mut self, config: &WindowConfig) -> Result<Self::Surface>;
}

/// The live window/context handle.
///
/// `shutdown` consumes the handle, so no frame operation can follow it.
pub trait Surface {
    /// Reports whether a close request has arrived.
    ///
    /// Processes pending platform events as a side effect.
    fn should_close(&mut self) -> bool;

    /// Starts a drawing pass against the back buffer.
    fn begin_frame(&mut self) -> Result<FrameStatus>;

    /// Fills the entire back buffer with `color`.
    fn clear(&mut self, color: Color);

    /// Ends the drawing pass and presents the back buffer.
    fn end_frame(&mut self);

    /// Releases the window and context.
    fn shutdown(self);
}
