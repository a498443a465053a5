#![no_std]
#![no_main]

mod peripherals;
mod platform;
mod system;

use core::sync::atomic::Ordering;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pin, Pull},
    peripherals::SPI2,
    saadc::{self, ChannelConfig, Saadc},
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use circlock::{App, BatteryObserver, BatteryState, TickObserver, TimeUnits};
use peripherals::{backlight::Backlight, battery::Battery, display::Display};
use platform::{PineTimePlatform, BATTERY_SUBSCRIBED, TICK_SUBSCRIBED};
use system::{
    config::{SystemConfig, BOOT_BRIGHTNESS, TIMEZONE},
    time::{TimeManager, TimeReference},
};

// Others
use chrono::{NaiveDateTime, Timelike};

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

// Communication channels
static BATTERY_STATUS: Signal<ThreadModeRawMutex, BatteryState> = Signal::new();
static TIME: Signal<ThreadModeRawMutex, NaiveDateTime> = Signal::new();

// Backlight pins are released on drop, which turns the light off
static BACKLIGHT: StaticCell<Backlight> = StaticCell::new();

/// Fetch the battery status from the hardware.
#[embassy_executor::task(pool_size = 1)]
async fn update_battery_status(mut battery: Battery) {
    let mut tick = Ticker::every(Duration::from_secs(1));
    loop {
        match battery.update().await {
            Ok(Some(state)) if BATTERY_SUBSCRIBED.load(Ordering::Relaxed) => {
                defmt::debug!("Battery status changed");
                BATTERY_STATUS.signal(state);
            }
            Ok(_) => {}
            Err(e) => defmt::warn!("Battery measurement failed: {}", e),
        }

        // Re-schedule the timer interrupt in 1s
        tick.next().await;
    }
}

/// Deliver a second tick with the current local time.
#[embassy_executor::task(pool_size = 1)]
async fn update_time(time: TimeManager) {
    let mut tick = Ticker::every(Duration::from_secs(1));
    loop {
        if TICK_SUBSCRIBED.load(Ordering::Relaxed) {
            TIME.signal(time.get_time());
        }

        // Re-schedule the timer interrupt
        tick.next().await;
    }
}

/// Own the watchface and redraw it whenever an event marks it dirty.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(mut display: Display, mut app: App<PineTimePlatform>) {
    loop {
        let now = TIME.wait().await;
        defmt::trace!(
            "Current time: {}:{}:{}",
            now.hour(),
            now.minute(),
            now.second(),
        );

        if BATTERY_STATUS.signaled() {
            let state = BATTERY_STATUS.wait().await;
            app.platform_mut().set_battery_state(state);
            app.on_battery_state(state);
        }

        app.on_tick(&now, TimeUnits::Second);

        if app.platform_mut().take_dirty() {
            if app.render(display.lcd()).is_err() {
                defmt::warn!("Frame not drawn");
            }
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize SAADC
    // Pin P0.31: Voltage level
    let channel_config = ChannelConfig::single_ended(p.P0_31);
    let saadc = Saadc::new(p.SAADC, Irqs, SystemConfig::battery_saadc(), [channel_config]);
    saadc.calibrate().await;

    // Initialize Backlight, off while the LCD controller starts up
    let backlight = BACKLIGHT.init(Backlight::init(
        [
            Output::new(p.P0_14.degrade(), Level::High, OutputDrive::Standard),
            Output::new(p.P0_22.degrade(), Level::High, OutputDrive::Standard),
            Output::new(p.P0_23.degrade(), Level::High, OutputDrive::Standard),
        ],
        0,
    ));

    // Initialize Battery
    let battery = Battery::init(saadc, Input::new(p.P0_12, Pull::None)).await;

    // Initialize SPI
    let spim = spim::Spim::new(
        p.SPI2,
        Irqs,
        p.P0_02,
        p.P0_04,
        p.P0_03,
        SystemConfig::lcd_spim(),
    );

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));

    // Load the watchface
    let time = TimeManager::init(TimeReference::from_boot_timestamp(UTC_EPOCH), TIMEZONE);
    let platform = PineTimePlatform::new(time, battery.state());
    let app = unwrap!(App::init(platform));
    backlight.set(BOOT_BRIGHTNESS);
    defmt::info!("Backlight at level {}", backlight.level());

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(update_battery_status(battery)));
    unwrap!(spawner.spawn(update_lcd(display, app)));
    unwrap!(spawner.spawn(update_time(time)));
}
