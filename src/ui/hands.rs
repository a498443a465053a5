//! Second, minute and hour hands
//!
//! Each hand is a short notch punched out of one ring: the second hand out of
//! the outer ring, the minute hand out of the middle one and the hour hand out
//! of the inner one. Notches are filled with the background color.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use super::{place, Layer};
use crate::{
    clock::ClockTime,
    config::{Palette, CLOCK_RADIUS, HAND_HEIGHT, HAND_MARGIN, HAND_WIDTH},
    path::HandPath,
    trig::HandAngles,
    window::HandId,
    Error,
};

const SECOND_HAND_Y: i32 = CLOCK_RADIUS as i32 + HAND_MARGIN;
const MINUTE_HAND_Y: i32 = SECOND_HAND_Y - HAND_HEIGHT - HAND_MARGIN;
const HOUR_HAND_Y: i32 = MINUTE_HAND_Y - HAND_HEIGHT - HAND_MARGIN;

/// Notch spanning one ring, hanging below the origin
const fn notch(y: i32) -> [Point; 4] {
    [
        Point::new(-HAND_WIDTH / 2, y + HAND_MARGIN),
        Point::new(HAND_WIDTH / 2, y + HAND_MARGIN),
        Point::new(HAND_WIDTH / 2, y - HAND_HEIGHT - HAND_MARGIN),
        Point::new(-HAND_WIDTH / 2, y - HAND_HEIGHT - HAND_MARGIN),
    ]
}

const fn hand_y(hand: HandId) -> i32 {
    match hand {
        HandId::Second => SECOND_HAND_Y,
        HandId::Minute => MINUTE_HAND_Y,
        HandId::Hour => HOUR_HAND_Y,
    }
}

/// Layer owning the three hand paths. Paths are added after the layer and
/// removed before it.
pub struct Hands {
    center: Point,
    palette: Palette,
    second: Option<HandPath>,
    minute: Option<HandPath>,
    hour: Option<HandPath>,
}

impl Hands {
    /// Create the layer without any paths
    pub fn new(center: Point, palette: Palette) -> Self {
        Self {
            center,
            palette,
            second: None,
            minute: None,
            hour: None,
        }
    }

    fn slot_mut(&mut self, hand: HandId) -> &mut Option<HandPath> {
        match hand {
            HandId::Second => &mut self.second,
            HandId::Minute => &mut self.minute,
            HandId::Hour => &mut self.hour,
        }
    }

    /// Create the path of `hand`, centered on the face
    pub fn add_path(&mut self, hand: HandId) -> Result<(), Error> {
        let mut path = HandPath::new(notch(hand_y(hand)));
        path.move_to(self.center);
        place(self.slot_mut(hand), path)
    }

    /// Destroy the path of `hand`. Returns whether it existed.
    pub fn remove_path(&mut self, hand: HandId) -> bool {
        self.slot_mut(hand).take().is_some()
    }

    pub fn path(&self, hand: HandId) -> Option<&HandPath> {
        match hand {
            HandId::Second => self.second.as_ref(),
            HandId::Minute => self.minute.as_ref(),
            HandId::Hour => self.hour.as_ref(),
        }
    }

    /// Rotate every hand to the given reading
    pub fn update(&mut self, time: &ClockTime) {
        let angles = HandAngles::from_time(time);
        for (slot, angle) in [
            (&mut self.second, angles.second),
            (&mut self.minute, angles.minute),
            (&mut self.hour, angles.hour),
        ] {
            if let Some(path) = slot {
                path.rotate_to(angle);
            }
        }
    }
}

impl Layer for Hands {
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let color = self.palette.background;
        for path in [&self.second, &self.minute, &self.hour].into_iter().flatten() {
            path.draw_filled(target, color)?;
        }
        Ok(())
    }
}
