//! Wall-clock readings

use chrono::{NaiveDateTime, Timelike};

use crate::Error;

/// One wall-clock reading, sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockTime {
    /// Create a reading from its parts (24-hour clock)
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, Error> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::InvalidTime);
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Sample the time of day from a local date and time.
    ///
    /// A leap second is shown as second 59.
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        Self {
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
            second: datetime.second().min(59) as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Hour on a 12-hour dial (1..=12) and whether it is after noon
    pub fn hour12(&self) -> (u8, bool) {
        let pm = self.hour >= 12;
        match self.hour % 12 {
            0 => (12, pm),
            h => (h, pm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn rejects_out_of_range_parts() {
        assert!(ClockTime::new(24, 0, 0).is_err());
        assert!(ClockTime::new(0, 60, 0).is_err());
        assert!(ClockTime::new(0, 0, 60).is_err());
        assert!(ClockTime::new(23, 59, 59).is_ok());
    }

    #[test]
    fn samples_datetime() {
        let dt = NaiveDate::from_ymd_opt(2015, 1, 5)
            .unwrap()
            .and_hms_opt(21, 5, 42)
            .unwrap();
        let time = ClockTime::from_datetime(&dt);
        assert_eq!((time.hour(), time.minute(), time.second()), (21, 5, 42));
    }

    #[test]
    fn leap_second_shows_as_59() {
        let dt = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 1_500)
            .unwrap();
        assert_eq!(ClockTime::from_datetime(&dt).second(), 59);
    }

    #[test]
    fn twelve_hour_dial() {
        assert_eq!(ClockTime::new(0, 0, 0).unwrap().hour12(), (12, false));
        assert_eq!(ClockTime::new(9, 0, 0).unwrap().hour12(), (9, false));
        assert_eq!(ClockTime::new(12, 0, 0).unwrap().hour12(), (12, true));
        assert_eq!(ClockTime::new(21, 0, 0).unwrap().hour12(), (9, true));
    }
}
