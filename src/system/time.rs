//! Time keeping module for PineTime

use chrono::{Duration, NaiveDateTime};
use embassy_time::Instant;

/// Wall-clock time at a known uptime
#[derive(Clone, Copy)]
pub struct TimeReference {
    /// Clock time (UTC)
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Reference from a UNIX timestamp taken at boot
    pub fn from_boot_timestamp(secs: i64) -> Self {
        Self {
            time: NaiveDateTime::from_timestamp_opt(secs, 0).unwrap_or(NaiveDateTime::UNIX_EPOCH),
            instant: Instant::from_ticks(0),
        }
    }
}

#[derive(Clone, Copy)]
pub struct TimeManager {
    reference: TimeReference,
    /// Offset of local time from UTC in seconds
    utc_offset: i32,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(reference: TimeReference, utc_offset: i32) -> Self {
        Self {
            reference,
            utc_offset,
        }
    }

    /// Get current local time
    pub fn get_time(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference.time
            + Duration::microseconds(elapsed.as_micros() as i64)
            + Duration::seconds(self.utc_offset as i64)
    }
}
