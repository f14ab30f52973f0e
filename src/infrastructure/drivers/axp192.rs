//! Minimal AXP192 PMIC driver.
//!
//! The M5StickC Plus powers its LCD logic and backlight from the AXP192's
//! LDO2/LDO3 rails; without these register writes the panel stays dark.
//! Only the display power path is implemented.

use esp_hal::Blocking;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::peripherals::{GPIO21, GPIO22, I2C0};
use esp_hal::time::Rate;
use log::warn;

const AXP192_ADDR: u8 = 0x34;

/// LDO2/LDO3 output voltage register.
const REG_LDO23_VOLTAGE: u8 = 0x28;
/// Power output control register.
const REG_POWER_OUTPUT: u8 = 0x12;

/// LDO2 and LDO3 at 3.0 V.
const LDO23_3V0: u8 = 0xCC;
/// DC-DC1 + LDO2 + LDO3 enable bits.
const OUTPUT_DCDC1_LDO23: u8 = 0x0D;

pub struct Axp192 {
    i2c: I2c<'static, Blocking>,
}

impl Axp192 {
    /// Take over the PMIC bus (I2C0, SDA GPIO21, SCL GPIO22).
    pub fn new(i2c: I2C0<'static>, sda: GPIO21<'static>, scl: GPIO22<'static>) -> Self {
        let i2c = I2c::new(
            i2c,
            I2cConfig::default().with_frequency(Rate::from_khz(400)),
        )
        .unwrap()
        .with_sda(sda)
        .with_scl(scl);

        Self { i2c }
    }

    /// Switch on the rails that feed the LCD panel and backlight.
    pub fn power_on_display(&mut self) {
        if let Err(e) = self.write_reg(REG_LDO23_VOLTAGE, LDO23_3V0) {
            warn!("axp192: voltage setup failed: {:?}", e);
            return;
        }

        // Read-modify-write so already enabled rails stay up
        let mut state = [0u8];
        match self.i2c.write_read(AXP192_ADDR, &[REG_POWER_OUTPUT], &mut state) {
            Ok(()) => {
                let value = state[0] | OUTPUT_DCDC1_LDO23;
                if let Err(e) = self.write_reg(REG_POWER_OUTPUT, value) {
                    warn!("axp192: output enable failed: {:?}", e);
                }
            }
            Err(e) => warn!("axp192: output state read failed: {:?}", e),
        }
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), esp_hal::i2c::master::Error> {
        self.i2c.write(AXP192_ADDR, &[reg, value])
    }
}
