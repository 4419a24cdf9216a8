//! In-memory platform for exercising the shell loop.
//!
//! Every call is appended to a shared log, and the surface keeps a CPU back
//! buffer that is scribbled over after each present so an incomplete clear
//! would show up in the next frame.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Result, anyhow};

use super::{FrameStatus, Platform, Surface, WindowConfig};
use crate::paint::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Initialize,
    ShouldClose(bool),
    BeginFrame(FrameStatus),
    Clear,
    EndFrame,
    Shutdown,
}

#[derive(Debug, Clone, Default)]
pub struct Script {
    /// `should_close` returns false this many times, then true.
    pub close_after: usize,
    pub fail_init: bool,
    /// Zero-based `begin_frame` calls that report `Skipped`.
    pub skip_begins: Vec<usize>,
    /// Zero-based `begin_frame` call that fails.
    pub fail_begin_at: Option<usize>,
    /// Zero-based `clear` call that panics.
    pub panic_at_clear: Option<usize>,
}

impl Script {
    pub fn close_after(polls: usize) -> Self {
        Self {
            close_after: polls,
            ..Self::default()
        }
    }

    pub fn failing_init() -> Self {
        Self {
            fail_init: true,
            ..Self::default()
        }
    }
}

#[derive(Default)]
struct Record {
    ops: Vec<Op>,
    presented: Vec<Vec<[u8; 4]>>,
    window: Option<WindowConfig>,
}

pub struct ScriptedPlatform {
    script: Script,
    record: Rc<RefCell<Record>>,
}

impl ScriptedPlatform {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            record: Rc::default(),
        }
    }

    pub fn ops(&self) -> Vec<Op> {
        self.record.borrow().ops.clone()
    }

    pub fn presented(&self) -> Vec<Vec<[u8; 4]>> {
        self.record.borrow().presented.clone()
    }

    pub fn initialized_with(&self) -> Option<WindowConfig> {
        self.record.borrow().window.clone()
    }
}

impl Platform for ScriptedPlatform {
    type Surface = ScriptedSurface;

    fn initialize(&mut self, config: &WindowConfig) -> Result<ScriptedSurface> {
        {
            let mut record = self.record.borrow_mut();
            record.ops.push(Op::Initialize);
            record.window = Some(config.clone());
        }

        if self.script.fail_init {
            return Err(anyhow!("no display available"));
        }

        let pixels = (config.width * config.height) as usize;
        Ok(ScriptedSurface {
            script: self.script.clone(),
            record: Rc::clone(&self.record),
            back_buffer: garbage(pixels, 0),
            polls: 0,
            begins: 0,
            clears: 0,
            in_frame: false,
        })
    }
}

pub struct ScriptedSurface {
    script: Script,
    record: Rc<RefCell<Record>>,
    back_buffer: Vec<[u8; 4]>,
    polls: usize,
    begins: usize,
    clears: usize,
    in_frame: bool,
}

impl ScriptedSurface {
    fn push(&self, op: Op) {
        self.record.borrow_mut().ops.push(op);
    }
}

impl Surface for ScriptedSurface {
    fn should_close(&mut self) -> bool {
        let close = self.polls >= self.script.close_after;
        self.polls += 1;
        self.push(Op::ShouldClose(close));
        close
    }

    fn begin_frame(&mut self) -> Result<FrameStatus> {
        let index = self.begins;
        self.begins += 1;

        if self.script.fail_begin_at == Some(index) {
            return Err(anyhow!("surface out of memory"));
        }

        let status = if self.script.skip_begins.contains(&index) {
            FrameStatus::Skipped
        } else {
            self.in_frame = true;
            FrameStatus::Ready
        };
        self.push(Op::BeginFrame(status));
        Ok(status)
    }

    fn clear(&mut self, color: Color) {
        assert!(self.in_frame, "clear outside of a frame");

        let index = self.clears;
        self.clears += 1;
        if self.script.panic_at_clear == Some(index) {
            panic!("scripted panic in clear");
        }

        let px = color.to_srgb_u8();
        self.back_buffer.iter_mut().for_each(|p| *p = px);
        self.push(Op::Clear);
    }

    fn end_frame(&mut self) {
        assert!(self.in_frame, "end_frame outside of a frame");
        self.in_frame = false;

        let presented = std::mem::take(&mut self.back_buffer);
        let seed = self.record.borrow().presented.len() + 1;
        self.back_buffer = garbage(presented.len(), seed);

        let mut record = self.record.borrow_mut();
        record.presented.push(presented);
        record.ops.push(Op::EndFrame);
    }

    fn shutdown(self) {
        self.push(Op::Shutdown);
    }
}

/// Stale swapchain contents: distinct per pixel and per frame.
fn garbage(pixels: usize, seed: usize) -> Vec<[u8; 4]> {
    (0..pixels)
        .map(|i| {
            let v = i.wrapping_mul(31).wrapping_add(seed.wrapping_mul(7));
            [v as u8, (v >> 8) as u8, 0, 255]
        })
        .collect()
}
