//! Fixed-point trigonometry
//!
//! Angles are integers where [`TRIG_MAX_ANGLE`] is one full turn, and
//! sine/cosine results are ratios scaled by [`TRIG_MAX_RATIO`].

use core::f32::consts::TAU;

use crate::clock::ClockTime;

/// One full turn
pub const TRIG_MAX_ANGLE: u32 = 0x10000;
/// Fixed-point representation of 1.0
pub const TRIG_MAX_RATIO: i32 = 0xffff;

/// Angle in fixed-point units, always within `0..TRIG_MAX_ANGLE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle(u32);

impl Angle {
    pub const ZERO: Self = Self(0);
    pub const HALF_TURN: Self = Self(TRIG_MAX_ANGLE / 2);

    /// Wrap any raw value onto the circle
    pub const fn new(raw: u32) -> Self {
        Self(raw % TRIG_MAX_ANGLE)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Angle in radians
    pub fn radians(self) -> f32 {
        self.0 as f32 * TAU / TRIG_MAX_ANGLE as f32
    }
}

/// Sine scaled by `TRIG_MAX_RATIO`
pub fn sin_lookup(angle: Angle) -> i32 {
    libm::roundf(libm::sinf(angle.radians()) * TRIG_MAX_RATIO as f32) as i32
}

/// Cosine scaled by `TRIG_MAX_RATIO`
pub fn cos_lookup(angle: Angle) -> i32 {
    libm::roundf(libm::cosf(angle.radians()) * TRIG_MAX_RATIO as f32) as i32
}

/// Rotation of each hand for one clock reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandAngles {
    pub second: Angle,
    pub minute: Angle,
    pub hour: Angle,
}

impl HandAngles {
    /// Hand paths hang below the center, so every hand carries a half turn.
    /// The hour hand advances in ten-minute steps.
    pub fn from_time(time: &ClockTime) -> Self {
        let second = TRIG_MAX_ANGLE * (time.second() as u32 + 30) / 60;
        let minute = TRIG_MAX_ANGLE * (time.minute() as u32 + 30) / 60;
        let hour = TRIG_MAX_ANGLE * ((time.hour() as u32 % 12) * 6 + time.minute() as u32 / 10)
            / (12 * 6)
            + TRIG_MAX_ANGLE / 2;

        Self {
            second: Angle::new(second),
            minute: Angle::new(minute),
            hour: Angle::new(hour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: u32 = TRIG_MAX_ANGLE;

    #[test]
    fn angle_wraps_onto_circle() {
        assert_eq!(Angle::new(FULL).raw(), 0);
        assert_eq!(Angle::new(FULL + 5).raw(), 5);
        assert_eq!(Angle::new(FULL - 1).raw(), FULL - 1);
    }

    #[test]
    fn lookup_cardinal_points() {
        let quarter = Angle::new(FULL / 4);
        assert_eq!(sin_lookup(Angle::ZERO), 0);
        assert_eq!(cos_lookup(Angle::ZERO), TRIG_MAX_RATIO);
        assert_eq!(sin_lookup(quarter), TRIG_MAX_RATIO);
        assert_eq!(cos_lookup(quarter), 0);
        assert_eq!(sin_lookup(Angle::HALF_TURN), 0);
        assert_eq!(cos_lookup(Angle::HALF_TURN), -TRIG_MAX_RATIO);
    }

    #[test]
    fn second_angle_for_every_second() {
        for s in 0..60u8 {
            let angles = HandAngles::from_time(&ClockTime::new(0, 0, s).unwrap());
            let expected = FULL * (s as u32 + 30) / 60 % FULL;
            assert_eq!(angles.second.raw(), expected, "second {}", s);
            assert!(angles.second.raw() < FULL);
        }
    }

    #[test]
    fn minute_angle_for_every_minute() {
        for m in 0..60u8 {
            let angles = HandAngles::from_time(&ClockTime::new(0, m, 0).unwrap());
            let expected = FULL * (m as u32 + 30) / 60 % FULL;
            assert_eq!(angles.minute.raw(), expected, "minute {}", m);
        }
    }

    #[test]
    fn hour_angle_for_every_hour_and_minute() {
        for h in 0..24u8 {
            for m in 0..60u8 {
                let angles = HandAngles::from_time(&ClockTime::new(h, m, 0).unwrap());
                let steps = (h as u32 % 12) * 6 + m as u32 / 10;
                let expected = (FULL * steps / 72 + FULL / 2) % FULL;
                assert_eq!(angles.hour.raw(), expected, "{}:{}", h, m);
                assert!(angles.hour.raw() < FULL);
            }
        }
    }

    #[test]
    fn hands_at_twelve_carry_half_turn() {
        let angles = HandAngles::from_time(&ClockTime::new(12, 0, 0).unwrap());
        assert_eq!(angles.second, Angle::HALF_TURN);
        assert_eq!(angles.minute, Angle::HALF_TURN);
        assert_eq!(angles.hour, Angle::HALF_TURN);
    }

    #[test]
    fn half_past_wraps_to_zero() {
        let angles = HandAngles::from_time(&ClockTime::new(6, 30, 30).unwrap());
        assert_eq!(angles.second, Angle::ZERO);
        assert_eq!(angles.minute, Angle::ZERO);
        // 6:30 is 39 of 72 steps, plus the half turn
        assert_eq!(angles.hour.raw(), (FULL * 39 / 72 + FULL / 2) % FULL);
    }
}
