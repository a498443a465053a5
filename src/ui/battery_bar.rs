//! Segmented battery bar

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Baseline, Text},
};

use super::Layer;
use crate::{
    battery::BatteryState,
    config::{
        Palette, BATTERY_BAR_Y, BATTERY_SEGMENTS, BATTERY_SEGMENT_CORNER, BATTERY_SEGMENT_GAP,
        BATTERY_SEGMENT_H, BATTERY_SEGMENT_W,
    },
};

pub struct BatteryBar {
    origin: Point,
    state: BatteryState,
    palette: Palette,
}

impl BatteryBar {
    /// Create a bar horizontally centered in `bounds`
    pub fn new(bounds: Rectangle, palette: Palette) -> Self {
        let width = Self::width() as i32;
        let x = bounds.top_left.x + (bounds.size.width as i32 - width) / 2;
        Self {
            origin: Point::new(x, BATTERY_BAR_Y),
            state: BatteryState::default(),
            palette,
        }
    }

    /// Width of all segment slots
    pub fn width() -> u32 {
        let slots = BATTERY_SEGMENTS as u32;
        slots * BATTERY_SEGMENT_W + (slots - 1) * BATTERY_SEGMENT_GAP
    }

    pub fn set_state(&mut self, state: BatteryState) {
        self.state = state;
    }

    pub fn state(&self) -> BatteryState {
        self.state
    }

    /// Bounds of the segment in slot `index`, counted from the left
    pub fn segment(&self, index: u8) -> Rectangle {
        let step = (BATTERY_SEGMENT_W + BATTERY_SEGMENT_GAP) as i32;
        Rectangle::new(
            self.origin + Point::new(index as i32 * step, 0),
            Size::new(BATTERY_SEGMENT_W, BATTERY_SEGMENT_H),
        )
    }
}

impl Layer for BatteryBar {
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let style = PrimitiveStyle::with_fill(self.palette.foreground);
        let corner = Size::new_equal(BATTERY_SEGMENT_CORNER);

        for index in 0..self.state.segments() {
            RoundedRectangle::with_equal_corners(self.segment(index), corner)
                .into_styled(style)
                .draw(target)?;
        }

        if self.state.is_charging() {
            let last = self.segment(BATTERY_SEGMENTS - 1);
            let position = Point::new(
                last.top_left.x + (BATTERY_SEGMENT_W + BATTERY_SEGMENT_GAP) as i32,
                last.top_left.y - 2,
            );
            Text::with_baseline(
                "+",
                position,
                MonoTextStyle::new(&FONT_6X10, self.palette.foreground),
                Baseline::Top,
            )
            .draw(target)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{LCD_H, LCD_W},
        ui::tests::FrameBuffer,
    };

    fn render(percent: u8, charging: bool) -> (FrameBuffer, BatteryBar) {
        let mut fb = FrameBuffer::new(LCD_W, LCD_H);
        let mut bar = BatteryBar::new(fb.bounding_box(), Palette::NORMAL);
        bar.set_state(BatteryState::new(percent, charging).unwrap());
        bar.draw(&mut fb).unwrap();
        (fb, bar)
    }

    fn segment_lit(fb: &FrameBuffer, bar: &BatteryBar, index: u8) -> bool {
        fb.pixel(bar.segment(index).center()) == Some(Palette::NORMAL.foreground)
    }

    #[test]
    fn bar_is_centered() {
        assert_eq!(BatteryBar::width(), 198);
        let bar = BatteryBar::new(Rectangle::new(Point::zero(), Size::new(240, 240)), Palette::NORMAL);
        assert_eq!(bar.segment(0).top_left, Point::new(21, BATTERY_BAR_Y));
        assert_eq!(bar.segment(19).top_left, Point::new(211, BATTERY_BAR_Y));
    }

    #[test]
    fn full_battery_lights_every_segment() {
        let (fb, bar) = render(100, false);
        for index in 0..BATTERY_SEGMENTS {
            assert!(segment_lit(&fb, &bar, index), "segment {}", index);
        }
    }

    #[test]
    fn segments_fill_left_to_right() {
        let (fb, bar) = render(47, false);
        for index in 0..9 {
            assert!(segment_lit(&fb, &bar, index), "segment {}", index);
        }
        for index in 9..BATTERY_SEGMENTS {
            assert!(!segment_lit(&fb, &bar, index), "segment {}", index);
        }
    }

    #[test]
    fn empty_battery_draws_nothing() {
        let (fb, _) = render(0, false);
        assert_eq!(fb.count(Palette::NORMAL.foreground), 0);
    }

    #[test]
    fn charging_adds_marker() {
        let (idle, _) = render(50, false);
        let (charging, _) = render(50, true);
        assert!(charging.count(Palette::NORMAL.foreground) > idle.count(Palette::NORMAL.foreground));
    }
}
