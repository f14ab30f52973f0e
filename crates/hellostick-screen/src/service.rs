//! Screen service.
//!
//! Owns a display and the status record. The firmware wraps the service in
//! one async mutex; holding the lock is what keeps painting serialized: a
//! hello sequence runs start to finish under it, and the periodic client
//! refresh takes the same lock, so it can never land mid-sequence.
//!
//! Generic over the draw target and over the pause between steps, so the
//! full hello flow runs on the host: tests plug in a canvas and a delay
//! that yields without waiting.

use core::fmt::Debug;

use embassy_time::{Duration, Timer};
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use log::warn;

use crate::sequence::HelloSequence;
use crate::status::{StatusScreen, render_starting};

/// Pause between sequence steps.
pub trait StepDelay {
    fn pause(&self, dwell: Duration) -> impl Future<Output = ()>;
}

/// Real-time delay on the embassy timer.
pub struct TimerDelay;

impl StepDelay for TimerDelay {
    async fn pause(&self, dwell: Duration) {
        Timer::after(dwell).await;
    }
}

pub struct ScreenService<D> {
    display: D,
    pub status: StatusScreen,
}

impl<D> ScreenService<D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
{
    pub fn new(display: D, status: StatusScreen) -> Self {
        Self { display, status }
    }

    /// Paint the boot message shown until the access point is up.
    pub fn render_starting(&mut self) {
        if let Err(e) = render_starting(&mut self.display) {
            warn!("screen: draw error: {:?}", e);
        }
    }

    /// Repaint the full idle status screen.
    pub fn render_status(&mut self) {
        if let Err(e) = self.status.render(&mut self.display) {
            warn!("screen: draw error: {:?}", e);
        }
    }

    /// Repaint only the connected-client strip.
    pub fn render_clients(&mut self) {
        if let Err(e) = self.status.render_clients(&mut self.display) {
            warn!("screen: draw error: {:?}", e);
        }
    }

    /// Play the full hello sequence, then restore the idle screen.
    ///
    /// The caller keeps the service locked for the whole run, which is what
    /// the sequence requires. With `TimerDelay` a run takes about 4.4s.
    pub async fn play_hello(&mut self, delay: &impl StepDelay) {
        for (step, dwell) in HelloSequence::new() {
            if let Err(e) = step.apply(&mut self.display, &self.status) {
                warn!("screen: draw error: {:?}", e);
            }
            if dwell.as_ticks() > 0 {
                delay.pause(dwell).await;
            }
        }
    }
}
