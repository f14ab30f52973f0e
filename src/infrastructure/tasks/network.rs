//! Background networking tasks.
//!
//! Wi-Fi AP controller, embassy-net runner and the DHCP server. The DHCP
//! task also maintains the connected-client count the status screen shows:
//! every acknowledged lease records its MAC in a bounded table, and the
//! distinct-MAC count is published through an atomic.

use core::net::Ipv4Addr;
use core::sync::atomic::{AtomicU32, Ordering};

use embassy_net::udp::{PacketMetadata, UdpSocket};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{
    AccessPointConfig,
    AuthMethod,
    ModeConfig,
    WifiController,
    WifiDevice,
};
use hellostick_net::dhcp::{
    DHCP_ACK,
    DHCP_DISCOVER,
    DHCP_OFFER,
    DHCP_REQUEST,
    LeaseTable,
    allocate_ip,
    build_dhcp_response,
    parse_dhcp_request,
};
use log::{info, warn};

/// DHCP server and client ports
const DHCP_SERVER_PORT: u16 = 67;
const DHCP_CLIENT_PORT: u16 = 68;

const MAX_LEASES: usize = 16;

static CONNECTED_CLIENTS: AtomicU32 = AtomicU32::new(0);

/// Number of stations that have taken a DHCP lease so far.
pub fn connected_clients() -> u32 {
    CONNECTED_CLIENTS.load(Ordering::Relaxed)
}

/// Background task for running the Wi-Fi AP
///
/// Configures the controller in AP mode as a WPA2 network.
#[embassy_executor::task]
pub async fn wifi_ap_task(
    mut controller: WifiController<'static>,
    ssid: &'static str,
    password: &'static str,
) {
    info!("wifi_ap: starting AP with SSID '{}'", ssid);

    let ap_config = AccessPointConfig::default()
        .with_ssid(ssid.into())
        .with_password(password.into())
        .with_auth_method(AuthMethod::Wpa2Personal);

    let mode_config = ModeConfig::AccessPoint(ap_config);
    controller.set_config(&mode_config).unwrap();
    controller.start_async().await.unwrap();

    info!("wifi_ap: AP started");

    // Keep the AP running
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}

/// Background task for running the network stack
#[embassy_executor::task]
pub async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}

/// DHCP server task
///
/// Listens for DHCP discover/request messages and responds with offers/acks.
/// Uses a stateless allocation strategy based on client MAC address.
#[embassy_executor::task]
pub async fn dhcp_server_task(stack: Stack<'static>, ap_ip_address: Ipv4Addr) {
    info!("dhcp_server: starting on port {}", DHCP_SERVER_PORT);

    let mut rx_meta = [PacketMetadata::EMPTY; 8];
    let mut rx_buffer = [0u8; 1024];
    let mut tx_meta = [PacketMetadata::EMPTY; 8];
    let mut tx_buffer = [0u8; 1024];

    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );

    if let Err(e) = socket.bind(DHCP_SERVER_PORT) {
        warn!("dhcp_server: failed to bind port {}: {:?}", DHCP_SERVER_PORT, e);
        return;
    }

    let mut leases = LeaseTable::<MAX_LEASES>::new();
    let mut packet = [0u8; 576];

    loop {
        match socket.recv_from(&mut packet).await {
            Ok((len, _remote)) => {
                // Parse the DHCP request
                let Some(request) = parse_dhcp_request(&packet[..len]) else {
                    continue;
                };

                let offered_ip = allocate_ip(&request.client_mac);

                let response_type = match request.message_type {
                    DHCP_DISCOVER => DHCP_OFFER,
                    DHCP_REQUEST => DHCP_ACK,
                    _ => continue,
                };

                if response_type == DHCP_ACK {
                    let count = leases.note(request.client_mac);
                    CONNECTED_CLIENTS.store(count, Ordering::Relaxed);
                    info!(
                        "dhcp_server: leased {} to {:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
                        offered_ip,
                        request.client_mac[0],
                        request.client_mac[1],
                        request.client_mac[2],
                        request.client_mac[3],
                        request.client_mac[4],
                        request.client_mac[5],
                    );
                }

                // Build response
                let response_len = build_dhcp_response(
                    ap_ip_address,
                    &mut packet,
                    &request,
                    offered_ip,
                    response_type,
                );

                // Send to broadcast on client port
                let dest = (Ipv4Addr::BROADCAST, DHCP_CLIENT_PORT);
                if let Err(e) = socket.send_to(&packet[..response_len], dest).await {
                    warn!("dhcp_server: send error: {:?}", e);
                }
            }
            Err(e) => {
                warn!("dhcp_server: recv error: {:?}", e);
            }
        }
    }
}
