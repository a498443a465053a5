//! General system configuration

use embassy_nrf::{
    config::{Config, Debug, HfclkSource, LfclkSource},
    interrupt::Priority,
    saadc::{self, Resolution},
    spim,
};

/// Offset of local time from UTC in seconds
pub const TIMEZONE: i32 = 3_600;

/// Backlight level after boot (0–7)
pub const BOOT_BRIGHTNESS: u8 = 2;

pub struct SystemConfig {}

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Config {
        // Generate default config, required because Config is set as
        // `non_exhaustive`
        let mut config = Config::default();

        // Set high-frequency and low-frequency clock sources to external
        config.hfclk_source = HfclkSource::ExternalXtal;
        config.lfclk_source = LfclkSource::ExternalXtal;

        // Enable DC/DC regulator to massively reduce runtime current consumption
        config.dcdc.reg1 = true;

        config.gpiote_interrupt_priority = Priority::P2;
        config.time_interrupt_priority = Priority::P2;

        // Allow debugging
        config.debug = Debug::Allowed;

        config
    }

    /// SPI settings for the ST7789
    pub fn lcd_spim() -> spim::Config {
        let mut config = spim::Config::default();
        // Use SPI at 8MHz (the fastest clock available on the nRF52832),
        // otherwise a full frame takes far longer than one tick.
        config.frequency = spim::Frequency::M8;
        // SPI must be used in mode 3. Mode 0 (the default) won't work.
        config.mode = spim::MODE_3;
        config
    }

    /// ADC settings for the battery voltage divider
    pub fn battery_saadc() -> saadc::Config {
        let mut config = saadc::Config::default();
        // 12 bit resolution, the voltage formula depends on it
        config.resolution = Resolution::_12BIT;
        config
    }
}
