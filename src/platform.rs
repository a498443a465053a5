//! Binds the watchface to the PineTime runtime

use core::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDateTime;
use circlock::{
    config::{LCD_H, LCD_W},
    window::{LayerId, Resource, Service},
    BatteryState, Platform,
};
use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::system::time::TimeManager;

/// Set while the watchface is subscribed to the tick service
pub static TICK_SUBSCRIBED: AtomicBool = AtomicBool::new(false);
/// Set while the watchface is subscribed to battery events
pub static BATTERY_SUBSCRIBED: AtomicBool = AtomicBool::new(false);

pub struct PineTimePlatform {
    time: TimeManager,
    battery: BatteryState,
    dirty: bool,
}

impl PineTimePlatform {
    pub fn new(time: TimeManager, battery: BatteryState) -> Self {
        Self {
            time,
            battery,
            dirty: false,
        }
    }

    /// Remember the latest reading for the next peek
    pub fn set_battery_state(&mut self, state: BatteryState) {
        self.battery = state;
    }

    /// Whether a redraw was requested since the last call
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }
}

fn subscription_flag(service: Service) -> &'static AtomicBool {
    match service {
        Service::Tick(_) => &TICK_SUBSCRIBED,
        Service::Battery => &BATTERY_SUBSCRIBED,
    }
}

impl Platform for PineTimePlatform {
    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(LCD_W, LCD_H))
    }

    fn now(&self) -> NaiveDateTime {
        self.time.get_time()
    }

    fn battery_state(&self) -> BatteryState {
        self.battery
    }

    fn acquire(&mut self, resource: Resource) {
        match resource {
            Resource::Subscription(service) => {
                defmt::info!("Subscribe {}", service);
                subscription_flag(service).store(true, Ordering::Relaxed);
            }
            Resource::Layer(LayerId::Background) => defmt::debug!("Root layer populated"),
            other => defmt::trace!("Acquire {}", other),
        }
    }

    fn release(&mut self, resource: Resource) {
        match resource {
            Resource::Subscription(service) => {
                defmt::info!("Unsubscribe {}", service);
                subscription_flag(service).store(false, Ordering::Relaxed);
            }
            other => defmt::trace!("Release {}", other),
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
