//! Window lifecycle and event dispatch
//!
//! The device runtime drives the watchface through two entry points,
//! [`App::init`] and [`App::deinit`], and delivers timer and battery events
//! through [`TickObserver`] and [`BatteryObserver`]. Everything the
//! watchface owns lives in the [`App`] context.

use chrono::NaiveDateTime;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

use crate::{
    battery::BatteryState,
    config::{Palette, PALETTE},
    ui::{circlock::CirclockFace, Layer, WatchFace},
    Error,
};

/// Granularity of a tick subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeUnits {
    Second,
    Minute,
}

/// Event source provided by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Service {
    Tick(TimeUnits),
    Battery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerId {
    Background,
    Date,
    DayLabel,
    NumLabel,
    DateLine,
    Hands,
    Time,
    Battery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandId {
    Second,
    Minute,
    Hour,
}

/// Something the window holds while loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resource {
    Layer(LayerId),
    Path(HandId),
    Subscription(Service),
}

/// Creation order on load. Unload destroys in reverse, so children go
/// before the layer that holds them.
pub const LOAD_ORDER: [Resource; 13] = [
    Resource::Layer(LayerId::Background),
    Resource::Layer(LayerId::Date),
    Resource::Layer(LayerId::DayLabel),
    Resource::Layer(LayerId::NumLabel),
    Resource::Layer(LayerId::DateLine),
    Resource::Layer(LayerId::Hands),
    Resource::Path(HandId::Second),
    Resource::Path(HandId::Minute),
    Resource::Path(HandId::Hour),
    Resource::Layer(LayerId::Time),
    Resource::Layer(LayerId::Battery),
    Resource::Subscription(Service::Tick(TimeUnits::Second)),
    Resource::Subscription(Service::Battery),
];

/// Capabilities of the device runtime hosting the watchface
pub trait Platform {
    /// Bounds of the root layer
    fn bounds(&self) -> Rectangle;

    /// Current local time
    fn now(&self) -> NaiveDateTime;

    /// Latest battery reading
    fn battery_state(&self) -> BatteryState;

    /// Register a resource with the runtime; subscriptions start delivering events
    fn acquire(&mut self, resource: Resource);

    /// Hand a resource back to the runtime
    fn release(&mut self, resource: Resource);

    /// Request a redraw of the whole window
    fn mark_dirty(&mut self);
}

/// Receives timer ticks
pub trait TickObserver {
    fn on_tick(&mut self, now: &NaiveDateTime, units: TimeUnits);
}

/// Receives battery state changes
pub trait BatteryObserver {
    fn on_battery_state(&mut self, state: BatteryState);
}

enum WindowState {
    Unloaded,
    Loaded(CirclockFace),
}

/// Window with a strict load/unload scope
pub struct Window {
    bounds: Rectangle,
    palette: Palette,
    state: WindowState,
}

impl Window {
    pub fn new(bounds: Rectangle, palette: Palette) -> Self {
        Self {
            bounds,
            palette,
            state: WindowState::Unloaded,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, WindowState::Loaded(_))
    }

    pub fn face(&self) -> Option<&CirclockFace> {
        match &self.state {
            WindowState::Loaded(face) => Some(face),
            WindowState::Unloaded => None,
        }
    }

    fn face_mut(&mut self) -> Option<&mut CirclockFace> {
        match &mut self.state {
            WindowState::Loaded(face) => Some(face),
            WindowState::Unloaded => None,
        }
    }

    /// Create every layer and path, then subscribe to ticks and battery events
    pub fn load<P: Platform>(&mut self, platform: &mut P) -> Result<(), Error> {
        if self.is_loaded() {
            return Err(Error::AlreadyLoaded);
        }

        let mut face = CirclockFace::new(self.bounds, self.palette);
        face.update_battery(platform.battery_state());

        for (count, resource) in LOAD_ORDER.iter().copied().enumerate() {
            if let Err(e) = face.build(resource) {
                warn!("Could not create {}", resource_name(resource));
                release(&mut face, platform, &LOAD_ORDER[..count]);
                return Err(e);
            }
            debug!("Acquire {}", resource_name(resource));
            platform.acquire(resource);
        }

        if let Err(e) = face.update_time(&platform.now()) {
            release(&mut face, platform, &LOAD_ORDER);
            return Err(e);
        }

        self.state = WindowState::Loaded(face);
        platform.mark_dirty();
        info!("Window loaded");
        Ok(())
    }

    /// Unsubscribe, then destroy everything in reverse order of creation
    pub fn unload<P: Platform>(&mut self, platform: &mut P) -> Result<(), Error> {
        let mut face = match core::mem::replace(&mut self.state, WindowState::Unloaded) {
            WindowState::Loaded(face) => face,
            WindowState::Unloaded => return Err(Error::NotLoaded),
        };

        release(&mut face, platform, &LOAD_ORDER);
        info!("Window unloaded");
        Ok(())
    }

    /// Draw the window if it is loaded
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match &self.state {
            WindowState::Loaded(face) => face.draw(target),
            WindowState::Unloaded => Ok(()),
        }
    }
}

/// Destroy each acquired object and hand its resource back, last one first
fn release<P: Platform>(face: &mut CirclockFace, platform: &mut P, acquired: &[Resource]) {
    for resource in acquired.iter().rev().copied() {
        let owned = !matches!(resource, Resource::Subscription(_));
        if owned && !face.destroy(resource) {
            warn!("{} was already gone", resource_name(resource));
        }
        debug!("Release {}", resource_name(resource));
        platform.release(resource);
    }
}

fn resource_name(resource: Resource) -> &'static str {
    match resource {
        Resource::Layer(LayerId::Background) => "background layer",
        Resource::Layer(LayerId::Date) => "date layer",
        Resource::Layer(LayerId::DayLabel) => "day label",
        Resource::Layer(LayerId::NumLabel) => "day number label",
        Resource::Layer(LayerId::DateLine) => "date line",
        Resource::Layer(LayerId::Hands) => "hands layer",
        Resource::Layer(LayerId::Time) => "time label",
        Resource::Layer(LayerId::Battery) => "battery layer",
        Resource::Path(HandId::Second) => "second hand",
        Resource::Path(HandId::Minute) => "minute hand",
        Resource::Path(HandId::Hour) => "hour hand",
        Resource::Subscription(Service::Tick(_)) => "tick service",
        Resource::Subscription(Service::Battery) => "battery service",
    }
}

/// The watchface application context
pub struct App<P: Platform> {
    platform: P,
    window: Window,
}

impl<P: Platform> App<P> {
    /// Create the window and push it, which loads it
    pub fn init(mut platform: P) -> Result<Self, Error> {
        let mut window = Window::new(platform.bounds(), PALETTE);
        window.load(&mut platform)?;
        Ok(Self { platform, window })
    }

    /// Unload and destroy the window, returning the platform
    pub fn deinit(mut self) -> Result<P, Error> {
        self.window.unload(&mut self.platform)?;
        Ok(self.platform)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Draw the whole window
    pub fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.window.draw(target)
    }
}

impl<P: Platform> TickObserver for App<P> {
    fn on_tick(&mut self, now: &NaiveDateTime, _units: TimeUnits) {
        let Some(face) = self.window.face_mut() else {
            return;
        };
        if face.update_time(now).is_err() {
            warn!("Time labels did not fit their buffers");
        }
        trace!("Tick");
        self.platform.mark_dirty();
    }
}

impl<P: Platform> BatteryObserver for App<P> {
    fn on_battery_state(&mut self, state: BatteryState) {
        let Some(face) = self.window.face_mut() else {
            return;
        };
        info!(
            "Battery status: {} ({})",
            state.percent(),
            if state.is_charging() {
                "charging"
            } else {
                "discharging"
            }
        );
        face.update_battery(state);
        self.platform.mark_dirty();
    }
}
