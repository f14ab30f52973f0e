//! Fixed device configuration.
//!
//! The access point credentials are published literal constants; they are
//! shown on the idle status screen and in the startup log.

use core::net::Ipv4Addr;

use embassy_time::Duration;

/// Access point name.
pub const AP_SSID: &str = "M5StickC-AP";

/// Access point passphrase. Must be at least 8 characters for WPA2.
pub const AP_PASSWORD: &str = "12345678";

/// Static address of the device inside its own network.
pub const AP_IP_ADDRESS: Ipv4Addr = Ipv4Addr::new(192, 168, 4, 1);

/// Prefix length of the AP network (192.168.4.0/24).
pub const AP_PREFIX_LEN: u8 = 24;

/// HTTP server port.
pub const HTTP_PORT: u16 = 80;

/// How often the status screen's client count is repainted.
pub const CLIENT_REFRESH_INTERVAL: Duration = Duration::from_millis(5000);

/// Main loop yield per iteration.
pub const MAIN_LOOP_PAUSE: Duration = Duration::from_millis(10);
