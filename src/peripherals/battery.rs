//! Battery status check
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use circlock::battery::{percent_from_millivolts, BatteryState};
use embassy_nrf::{gpio::Input, peripherals::P0_12, saadc::Saadc};

/// Battery API
pub struct Battery {
    /// ADC instance for battery voltage measurement
    adc: Saadc<'static, 1>,
    /// Charge indication pin:
    /// high = battery, low = charging
    pin_charge_indication: Input<'static, P0_12>,
    /// Last reported state
    state: BatteryState,
}

impl Battery {
    /// Configure battery settings on boot and take a first reading
    pub async fn init(adc: Saadc<'static, 1>, charge_pin: Input<'static, P0_12>) -> Self {
        let mut battery = Self {
            adc,
            pin_charge_indication: charge_pin,
            state: BatteryState::default(),
        };
        match battery.read().await {
            Ok(state) => battery.state = state,
            Err(e) => defmt::warn!("First battery measurement failed: {}, showing empty", e),
        }
        battery
    }

    /// Last reported state
    pub fn state(&self) -> BatteryState {
        self.state
    }

    /// Read the hardware. Returns the new state if it changed.
    pub async fn update(&mut self) -> Result<Option<BatteryState>, Error> {
        let state = self.read().await?;
        if state == self.state {
            return Ok(None);
        }
        self.state = state;
        Ok(Some(state))
    }

    async fn read(&mut self) -> Result<BatteryState, Error> {
        let voltage = self.get_voltage().await?;
        let charging = self.pin_charge_indication.is_low();
        BatteryState::new(percent_from_millivolts(voltage), charging)
            .map_err(|_| Error::InvalidMeasurement)
    }

    /// Battery voltage in millivolts
    async fn get_voltage(&mut self) -> Result<u16, Error> {
        let mut buf = [0; 1];
        self.adc.sample(&mut buf).await;
        match buf[0] {
            0..=4095 => {
                // For detailed explanation of formula check https://wiki.pine64.org/wiki/PineTime
                // Use u32 during calculation to prevent overflow
                Ok((buf[0] as u32 * 2000 / 1241) as u16)
            }
            _ => Err(Error::InvalidMeasurement),
        }
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    InvalidMeasurement,
}
