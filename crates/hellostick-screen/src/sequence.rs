//! Hello flash sequence - explicit step state machine
//!
//! The sequence the device plays when `/hello` is requested: clear the
//! screen, flash white/red/green/blue three times over, show a large
//! "HELLO!" message, then restore the idle status screen. Expressed as an
//! iterator of `(Step, dwell)` pairs so the order and timing are plain data
//! that tests can walk without hardware or a clock.
//!
//! The driver of this iterator is expected to hold the screen for the whole
//! run: steps cannot be cancelled or interleaved with other painting.

use embassy_time::Duration;
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    text::{Baseline, Text},
};
use profont::PROFONT_24_POINT;

use crate::status::StatusScreen;

/// Colors of one flash cycle, in order.
pub const FLASH_COLORS: [Rgb565; 4] =
    [Rgb565::WHITE, Rgb565::RED, Rgb565::GREEN, Rgb565::BLUE];

/// Number of times the flash cycle repeats.
pub const FLASH_CYCLES: usize = 3;

/// How long each flash color stays on screen.
pub const FLASH_DWELL: Duration = Duration::from_millis(200);

/// How long the "HELLO!" message stays on screen.
pub const MESSAGE_HOLD: Duration = Duration::from_millis(2000);

const MESSAGE: &str = "HELLO!";
const MESSAGE_ORIGIN: Point = Point::new(20, 40);

/// One step of the hello sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Fill the screen black.
    Clear,
    /// Fill the screen with one flash color.
    Flash(Rgb565),
    /// Show the "HELLO!" message on a cleared screen.
    Message,
    /// Repaint the idle status screen.
    RestoreIdle,
}

impl Step {
    /// Paint this step onto the display.
    ///
    /// `RestoreIdle` re-renders the given status record in full.
    pub fn apply<D>(self, target: &mut D, status: &StatusScreen) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self {
            Step::Clear => target.clear(Rgb565::BLACK),
            Step::Flash(color) => target.clear(color),
            Step::Message => {
                target.clear(Rgb565::BLACK)?;
                let style = MonoTextStyle::new(&PROFONT_24_POINT, Rgb565::YELLOW);
                Text::with_baseline(MESSAGE, MESSAGE_ORIGIN, style, Baseline::Top)
                    .draw(target)?;
                Ok(())
            }
            Step::RestoreIdle => status.render(target),
        }
    }
}

/// Iterator over the fixed hello sequence.
///
/// Yields every step together with the time the screen must hold it before
/// the next step is painted. The order is fixed and has no branching.
pub struct HelloSequence {
    position: usize,
}

impl HelloSequence {
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    const FLASH_COUNT: usize = FLASH_CYCLES * FLASH_COLORS.len();
}

impl Default for HelloSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for HelloSequence {
    type Item = (Step, Duration);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.position;
        self.position += 1;

        if index == 0 {
            return Some((Step::Clear, Duration::from_ticks(0)));
        }
        let index = index - 1;
        if index < Self::FLASH_COUNT {
            let color = FLASH_COLORS[index % FLASH_COLORS.len()];
            return Some((Step::Flash(color), FLASH_DWELL));
        }
        match index - Self::FLASH_COUNT {
            0 => Some((Step::Message, MESSAGE_HOLD)),
            1 => Some((Step::RestoreIdle, Duration::from_ticks(0))),
            _ => None,
        }
    }
}

/// Total dwell time of one full sequence run.
pub fn sequence_dwell_total() -> Duration {
    HelloSequence::new().fold(Duration::from_ticks(0), |acc, (_, dwell)| acc + dwell)
}
