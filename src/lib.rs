//! Circlock: an analog ring watchface
//!
//! Hands are notches cut out of three concentric rings. The face draws onto
//! any `embedded-graphics` target; the device runtime feeds it timer ticks
//! and battery readings through [`window::App`].
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod battery;
pub mod clock;
pub mod config;
pub mod path;
pub mod trig;
pub mod ui;
pub mod window;

pub use battery::BatteryState;
pub use clock::ClockTime;
pub use window::{App, BatteryObserver, Platform, Resource, Service, TickObserver, TimeUnits};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Hour, minute or second out of range
    InvalidTime,
    /// Battery charge above 100 %
    InvalidPercent,
    /// Window load, or layer creation, requested while already present
    AlreadyLoaded,
    /// Window unload requested while unloaded
    NotLoaded,
    /// Child layer or path created before its parent layer
    MissingParent,
    /// Text did not fit its label buffer
    Format,
}
