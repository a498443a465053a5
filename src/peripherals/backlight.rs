//! Backlight control
//!
//! Implementation based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/backlight.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::gpio::{AnyPin, Output};

/// Three active-low backlight pins, each switching a FET through a
/// resistor (low 2.2 kΩ, mid 100 Ω, high 30 Ω). Bit `n` of the level
/// drives pin `n`, giving 7 brightness levels plus off.
pub struct Backlight {
    pins: [Output<'static, AnyPin>; 3],
    level: u8,
}

impl Backlight {
    pub const MAX_LEVEL: u8 = 7;

    /// Take the low, mid and high pins and apply `level`
    pub fn init(pins: [Output<'static, AnyPin>; 3], level: u8) -> Self {
        let mut backlight = Self { pins, level };
        backlight.set(level);
        backlight
    }

    /// Set the brightness level, clamped to `MAX_LEVEL`. 0 is off.
    pub fn set(&mut self, level: u8) {
        let level = level.min(Self::MAX_LEVEL);
        defmt::debug!("Setting backlight brightness to {}", level);
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            if level & (1 << bit) != 0 {
                pin.set_low();
            } else {
                pin.set_high();
            }
        }
        self.level = level;
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}
