mod axp192;
mod buttons;
mod display;
mod random;
pub mod wifi_ap;

pub use axp192::Axp192;
pub use buttons::Buttons;
pub use display::{StickDisplay, init_display};
pub use wifi_ap::{WifiApConfig, start_wifi_ap};
