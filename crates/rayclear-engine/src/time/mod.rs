//! Frame timing.
//!
//! One `FrameClock` per run loop; call `tick()` once per presented frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
