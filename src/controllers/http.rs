//! HTTP controller bound to the device hardware.
//!
//! The request handling itself lives in `hellostick_net::http`; this
//! module pins its generics to the ST7789 screen behind the firmware's
//! mutex and to real-time step delays.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use hellostick_net::http::HelloHttpController;
use hellostick_screen::TimerDelay;

use crate::infrastructure::drivers::StickDisplay;
use crate::infrastructure::services::SharedScreen;

pub type AppHttpController =
    HelloHttpController<'static, CriticalSectionRawMutex, StickDisplay, TimerDelay>;

pub fn init_http_controller(screen: &'static SharedScreen) -> &'static AppHttpController {
    crate::mk_static!(
        AppHttpController,
        HelloHttpController::new(screen, TimerDelay, hellostick_page::INDEX_HTML)
    )
}
