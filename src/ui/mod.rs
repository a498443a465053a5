//! UI definitions module

use chrono::NaiveDateTime;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::{battery::BatteryState, Error};

pub mod background;
pub mod battery_bar;
pub mod circlock;
pub mod date;
pub mod hands;
pub mod labels;

/// Drawable region of the window
pub trait Layer {
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>;
}

pub trait WatchFace: Layer {
    /// Update every time-dependent layer from one sampled time
    fn update_time(&mut self, now: &NaiveDateTime) -> Result<(), Error>;

    /// Update the battery indicator
    fn update_battery(&mut self, state: BatteryState);
}

/// Store a newly created layer or path in its empty slot
pub(crate) fn place<T>(slot: &mut Option<T>, value: T) -> Result<(), Error> {
    if slot.is_some() {
        return Err(Error::AlreadyLoaded);
    }
    *slot = Some(value);
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{vec, vec::Vec};

    use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

    /// In-memory display for inspecting rendered pixels
    pub struct FrameBuffer {
        size: Size,
        pixels: Vec<Rgb565>,
    }

    impl FrameBuffer {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                size: Size::new(width, height),
                pixels: vec![Rgb565::BLACK; (width * height) as usize],
            }
        }

        pub fn pixel(&self, point: Point) -> Option<Rgb565> {
            self.index(point).map(|i| self.pixels[i])
        }

        /// Number of pixels with the given color
        pub fn count(&self, color: Rgb565) -> usize {
            self.pixels.iter().filter(|&&p| p == color).count()
        }

        fn index(&self, point: Point) -> Option<usize> {
            if point.x < 0 || point.y < 0 {
                return None;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= self.size.width || y >= self.size.height {
                return None;
            }
            Some((y * self.size.width + x) as usize)
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            self.size
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = Rgb565;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if let Some(i) = self.index(point) {
                    self.pixels[i] = color;
                }
            }
            Ok(())
        }
    }
}
