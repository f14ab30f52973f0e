//! HelloStick Firmware
//!
//! M5StickC Plus firmware that:
//! - Starts a Wi-Fi Access Point (WPA2, fixed credentials)
//! - Runs a DHCP server for clients
//! - Serves an HTTP page on 192.168.4.1 with a hello button
//! - Plays a flash sequence on the display when `/hello` is requested
//! - Shows AP credentials and a connected-client count on the idle screen

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_println::println;
use hellostick_esp::{
    config,
    controllers::init_http_controller,
    infrastructure::{
        drivers::{Axp192, Buttons, WifiApConfig, init_display, start_wifi_ap},
        services::{Screen, SharedScreen},
        tasks::{connected_clients, http_server_task},
    },
    mk_static,
};
use hellostick_screen::StatusScreen;
use log::info;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    println!("=================================");
    println!("  HelloStick Firmware");
    println!("=================================");

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Allocate heap memory (64 + 32 KB)
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start RTOS
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // The panel is dark until the PMIC rails are up
    let mut pmic = Axp192::new(peripherals.I2C0, peripherals.GPIO21, peripherals.GPIO22);
    pmic.power_on_display();

    let display = init_display(
        peripherals.SPI2,
        peripherals.GPIO13,
        peripherals.GPIO15,
        peripherals.GPIO5,
        peripherals.GPIO23,
        peripherals.GPIO18,
    );

    let status = StatusScreen::new(config::AP_SSID, config::AP_PASSWORD);
    let screen: &'static SharedScreen =
        mk_static!(SharedScreen, SharedScreen::new(Screen::new(display, status)));
    screen.lock().await.render_starting();

    // Bring up the access point and its DHCP server
    let stack = start_wifi_ap(
        spawner,
        peripherals.WIFI,
        WifiApConfig {
            ssid: config::AP_SSID,
            password: config::AP_PASSWORD,
            ip_address: config::AP_IP_ADDRESS,
            prefix_len: config::AP_PREFIX_LEN,
        },
    )
    .await;
    info!("AP link is up");

    let ip = stack.config_v4().map(|cfg| cfg.address.address());

    let controller = init_http_controller(screen);
    spawner.spawn(http_server_task(stack, controller)).ok();

    {
        let mut screen = screen.lock().await;
        screen.status.ip = ip;
        screen.status.server_ready = true;
        screen.render_status();
    }

    info!("SSID: {}", config::AP_SSID);
    info!("Password: {}", config::AP_PASSWORD);
    if let Some(ip) = ip {
        info!("IP: {}", ip);
    }
    info!("HTTP server ready on port {}", config::HTTP_PORT);

    let mut buttons = Buttons::new(peripherals.GPIO37, peripherals.GPIO39);
    let mut last_refresh = Instant::now();

    loop {
        buttons.poll();

        if last_refresh.elapsed() >= config::CLIENT_REFRESH_INTERVAL {
            let mut screen = screen.lock().await;
            let clients = connected_clients();
            if clients != screen.status.clients {
                screen.status.clients = clients;
            }
            screen.render_clients();
            last_refresh = Instant::now();
        }

        Timer::after(config::MAIN_LOOP_PAUSE).await;
    }
}
