//! Device button polling.
//!
//! BtnA (GPIO37) and BtnB (GPIO39) are input-only pins with external
//! pull-ups; pressed reads low. No action is bound to either button in
//! this firmware, the main loop just polls them each iteration.

use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::peripherals::{GPIO37, GPIO39};
use log::debug;

pub struct Buttons {
    btn_a: Input<'static>,
    btn_b: Input<'static>,
    a_down: bool,
    b_down: bool,
}

impl Buttons {
    pub fn new(btn_a: GPIO37<'static>, btn_b: GPIO39<'static>) -> Self {
        Self {
            btn_a: Input::new(btn_a, InputConfig::default().with_pull(Pull::None)),
            btn_b: Input::new(btn_b, InputConfig::default().with_pull(Pull::None)),
            a_down: false,
            b_down: false,
        }
    }

    /// Sample both buttons once, tracking press edges.
    pub fn poll(&mut self) {
        let a = self.btn_a.is_low();
        if a && !self.a_down {
            debug!("buttons: BtnA pressed");
        }
        self.a_down = a;

        let b = self.btn_b.is_low();
        if b && !self.b_down {
            debug!("buttons: BtnB pressed");
        }
        self.b_down = b;
    }
}
