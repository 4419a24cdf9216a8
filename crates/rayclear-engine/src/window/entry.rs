use anyhow::{Context, Result};
use ouroboros::self_referencing;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::device::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};

/// The OS window and the GPU context whose surface borrows it.
#[self_referencing]
pub(crate) struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowEntry {
    /// Binds a GPU context to `window`, blocking on adapter/device acquisition.
    pub(super) fn create(window: Window, gpu_init: GpuInit) -> Result<Self> {
        Self::try_new(window, |w| {
            pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
        })
    }

    pub(super) fn physical_size(&self) -> PhysicalSize<u32> {
        self.borrow_gpu().size()
    }

    pub(super) fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.with_gpu_mut(|gpu| gpu.resize(new_size));
    }

    pub(super) fn resize_to_window(&mut self) {
        let new_size = self.borrow_window().inner_size();
        self.resize(new_size);
    }

    pub(super) fn begin_frame(&self) -> std::result::Result<GpuFrame, wgpu::SurfaceError> {
        self.borrow_gpu().begin_frame()
    }

    pub(super) fn handle_surface_error(&mut self, err: &wgpu::SurfaceError) -> SurfaceErrorAction {
        self.with_gpu_mut(|gpu| gpu.handle_surface_error(err))
    }

    pub(super) fn present(&self, frame: GpuFrame) {
        self.with(|fields| {
            fields.window.pre_present_notify();
            fields.gpu.present(frame);
        });
    }
}
