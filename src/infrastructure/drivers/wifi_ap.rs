//! Wi-Fi access point bring-up.
//!
//! Initializes the radio and the embassy-net stack in AP mode with a
//! static address, then spawns the controller, runner and DHCP server
//! tasks. Returns once the link is up.

use core::net::Ipv4Addr;

use embassy_executor::Spawner;
use embassy_net::{Ipv4Cidr, Stack, StackResources, StaticConfigV4};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_radio::wifi::Config;
use static_cell::make_static;

use super::random::get_seed;
use crate::infrastructure::tasks::{
    dhcp_server_task,
    network_runner_task,
    wifi_ap_task,
};

const MAX_CONNECTIONS: usize = 6;

pub struct WifiApConfig {
    pub ssid: &'static str,
    pub password: &'static str,
    pub ip_address: Ipv4Addr,
    pub prefix_len: u8,
}

/// Initialize the network stack for AP (Access Point) mode.
///
/// Uses a static IP configuration (192.168.4.1/24); clients get their
/// addresses from the firmware's own DHCP server.
pub async fn start_wifi_ap(
    spawner: Spawner,
    wifi_device: WIFI<'static>,
    config: WifiApConfig,
) -> Stack<'static> {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().unwrap());
    let wifi_config = Config::default();
    let (controller, interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, wifi_config).unwrap();

    // Static IP configuration for AP mode
    let static_config = StaticConfigV4 {
        address: Ipv4Cidr::new(config.ip_address, config.prefix_len),
        gateway: Some(config.ip_address),
        dns_servers: heapless::Vec::default(),
    };
    let net_config = embassy_net::Config::ipv4_static(static_config);

    let network_resources = make_static!(StackResources::<MAX_CONNECTIONS>::new());
    let (stack, runner) =
        embassy_net::new(interfaces.ap, net_config, network_resources, get_seed());

    spawner
        .spawn(wifi_ap_task(controller, config.ssid, config.password))
        .ok();
    spawner.spawn(network_runner_task(runner)).ok();

    loop {
        if stack.is_link_up() {
            break;
        }
        Timer::after(Duration::from_millis(100)).await;
    }
    // Give some extra time
    Timer::after(Duration::from_millis(100)).await;

    spawner
        .spawn(dhcp_server_task(stack, config.ip_address))
        .ok();

    stack
}
