//! Platform abstraction layer
//!
//! Seams between the deterministic simulation and a host:
//! - Input device snapshots and their translation to paddle intent
//! - Fixed-timestep frame pacing
//! - Render sinks that read settled game state

pub mod input;
pub mod render;
pub mod time;

pub use input::{Autopilot, DeviceState, InputSource};
pub use render::{LogSink, RenderSink};
pub use time::FrameClock;
