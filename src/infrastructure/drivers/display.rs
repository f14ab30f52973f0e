//! ST7789V2 display driver setup for the M5StickC Plus.
//!
//! Pin mapping:
//! - CS: GPIO5
//! - DC: GPIO23
//! - CLK: GPIO13 (SPI2)
//! - MOSI: GPIO15 (SPI2)
//! - Reset: GPIO18
//!
//! The panel is 135x240 portrait with a (52, 40) framebuffer offset; the
//! firmware rotates it to 240x135 landscape. Panel power comes from the
//! AXP192, which must be switched on first.

use display_interface_spi::SPIInterface;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::Blocking;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::{GPIO5, GPIO13, GPIO15, GPIO18, GPIO23, SPI2};
use esp_hal::spi::Mode;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::time::Rate;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;

/// Display type alias for the ST7789V2 behind SPI2.
pub type StickDisplay = mipidsi::Display<
    SPIInterface<
        ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, NoDelay>,
        Output<'static>,
    >,
    ST7789,
    Output<'static>,
>;

/// Initialize the display.
///
/// Returns the initialized display ready for drawing.
pub fn init_display(
    spi: SPI2<'static>,
    sck: GPIO13<'static>,
    mosi: GPIO15<'static>,
    cs: GPIO5<'static>,
    dc: GPIO23<'static>,
    rst: GPIO18<'static>,
) -> StickDisplay {
    // The ST7789 is reliable at 26 MHz on the ESP32
    let spi = Spi::new(
        spi,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(26))
            .with_mode(Mode::_0),
    )
    .unwrap()
    .with_sck(sck)
    .with_mosi(mosi);

    let cs = Output::new(cs, Level::High, OutputConfig::default());
    let dc = Output::new(dc, Level::Low, OutputConfig::default());
    let rst = Output::new(rst, Level::High, OutputConfig::default());

    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).unwrap();
    let di = SPIInterface::new(spi_device, dc);

    // Native panel is 135x240 portrait; rotate 90 degrees for landscape
    Builder::new(ST7789, di)
        .display_size(135, 240)
        .display_offset(52, 40)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(rst)
        .init(&mut Delay::new())
        .unwrap()
}
