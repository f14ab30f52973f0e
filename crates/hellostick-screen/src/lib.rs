//! Screen logic for the HelloStick firmware.
//!
//! Architecture layers:
//! - `status` - The idle status screen model and its painting
//! - `sequence` - The hello flash sequence as an explicit step state machine
//! - `service` - Ownership of a display plus the status record, and the
//!   async driver that plays the sequence with a pluggable step delay
//!
//! Everything here paints through `embedded_graphics::DrawTarget`, so the
//! whole crate runs on the host for tests; the firmware plugs in the real
//! ST7789 display and drives step dwell times with `embassy_time`.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod sequence;
pub mod service;
pub mod status;

pub use sequence::{HelloSequence, Step, sequence_dwell_total};
pub use service::{ScreenService, StepDelay, TimerDelay};
pub use status::{StatusScreen, render_starting};

/// Logical display size after landscape rotation (M5StickC Plus).
pub const WIDTH: u32 = 240;
/// Logical display height after landscape rotation.
pub const HEIGHT: u32 = 135;

#[cfg(test)]
pub(crate) mod testutil;
