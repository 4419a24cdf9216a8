use std::time::Duration;

use anyhow::Result;
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

use super::handler::Handler;
use crate::device::{GpuFrame, SurfaceErrorAction};
use crate::paint::Color;
use crate::shell::{FrameStatus, Surface};

/// Live winit window + GPU context.
pub struct WinitSurface {
    event_loop: EventLoop<()>,
    handler: Handler,
    /// Acquired between `begin_frame` and `end_frame`.
    frame: Option<GpuFrame>,
}

impl WinitSurface {
    pub(super) fn new(event_loop: EventLoop<()>, handler: Handler) -> Self {
        Self {
            event_loop,
            handler,
            frame: None,
        }
    }
}

impl Surface for WinitSurface {
    fn should_close(&mut self) -> bool {
        if self.handler.close_requested {
            return true;
        }

        // Drain what is queued without waiting while we can draw; with no
        // surface (suspended) there is nothing to do but wait for events.
        let timeout = self.handler.entry.is_some().then_some(Duration::ZERO);

        let status = self.event_loop.pump_app_events(timeout, &mut self.handler);
        if let PumpStatus::Exit(code) = status {
            log::info!("event loop exited with code {code}");
            self.handler.close_requested = true;
        }

        self.handler.close_requested
    }

    fn begin_frame(&mut self) -> Result<FrameStatus> {
        let Some(entry) = self.handler.entry.as_mut() else {
            return Ok(FrameStatus::Skipped);
        };

        match entry.begin_frame() {
            Ok(frame) => {
                self.frame = Some(frame);
                Ok(FrameStatus::Ready)
            }
            Err(err) => match entry.handle_surface_error(&err) {
                SurfaceErrorAction::Fatal => {
                    Err(anyhow::anyhow!("unrecoverable surface error: {err}"))
                }
                action => {
                    log::warn!("surface error: {err} ({action:?})");
                    Ok(FrameStatus::Skipped)
                }
            },
        }
    }

    fn clear(&mut self, color: Color) {
        if let Some(frame) = self.frame.as_mut() {
            frame.clear(color);
        }
    }

    fn end_frame(&mut self) {
        let Some(frame) = self.frame.take() else {
            return;
        };

        match self.handler.entry.as_ref() {
            Some(entry) => entry.present(frame),
            None => log::debug!("surface released mid-frame; frame dropped"),
        }
    }

    fn shutdown(self) {
        let Self {
            event_loop,
            mut handler,
            frame,
        } = self;

        // Texture first, then the GPU context, then the window, then the loop.
        drop(frame);
        drop(handler.entry.take());
        drop(event_loop);

        log::info!("window closed");
    }
}
