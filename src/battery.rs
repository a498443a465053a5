//! Battery state as seen by the watchface

use crate::{config::BATTERY_SEGMENTS, Error};

/// Latest battery reading pushed by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryState {
    /// Charge in percent (0–100)
    percent: u8,
    /// Charging state
    charging: bool,
}

impl BatteryState {
    pub fn new(percent: u8, charging: bool) -> Result<Self, Error> {
        if percent > 100 {
            return Err(Error::InvalidPercent);
        }
        Ok(Self { percent, charging })
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_charging(&self) -> bool {
        self.charging
    }

    /// Number of filled battery bar segments, one per 5 %
    pub fn segments(&self) -> u8 {
        (self.percent / 5).min(BATTERY_SEGMENTS)
    }
}

/// Estimate battery capacity from its voltage in millivolts.
///
/// Uses fixed data points and linear interpolation in between.
pub fn percent_from_millivolts(voltage: u16) -> u8 {
    (match voltage {
        0..=3449 => 0,
        3450..=3699 => (voltage - 3450) / 5,
        3700..=4199 => 50 + (voltage - 3700) / 10,
        _ => 100,
    }) as u8
}
