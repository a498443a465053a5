//! Ring bezels and divider line

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle},
};

use super::Layer;
use crate::config::{
    Palette, CLOCK_CENTER_Y, CLOCK_RADIUS, DIVIDER_INSET, DIVIDER_Y, HAND_HEIGHT, HAND_MARGIN,
    RING_COUNT,
};

/// Static part of the face
pub struct Background {
    bounds: Rectangle,
    center: Point,
    palette: Palette,
}

impl Background {
    pub fn new(bounds: Rectangle, palette: Palette) -> Self {
        Self {
            bounds,
            center: Self::center_for(bounds),
            palette,
        }
    }

    /// Ring center for a window with the given bounds
    pub fn center_for(bounds: Rectangle) -> Point {
        Point::new(
            bounds.top_left.x + bounds.size.width as i32 / 2,
            CLOCK_CENTER_Y,
        )
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Outer radius of each ring, outermost first
    pub fn ring_radii() -> [u32; RING_COUNT] {
        let step = (HAND_HEIGHT + HAND_MARGIN) as u32;
        core::array::from_fn(|i| CLOCK_RADIUS - i as u32 * step)
    }
}

/// Filled circle of `radius` pixels around `center`
fn disc(center: Point, radius: u32) -> Circle {
    Circle::with_center(center, 2 * radius + 1)
}

impl Layer for Background {
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let fg = PrimitiveStyle::with_fill(self.palette.foreground);
        let bg = PrimitiveStyle::with_fill(self.palette.background);

        self.bounds.into_styled(bg).draw(target)?;

        for radius in Self::ring_radii() {
            disc(self.center, radius).into_styled(fg).draw(target)?;
            disc(self.center, radius - HAND_HEIGHT as u32)
                .into_styled(bg)
                .draw(target)?;
        }

        let width = self.bounds.size.width as i32;
        let left = self.bounds.top_left.x;
        Line::new(
            Point::new(left + DIVIDER_INSET, DIVIDER_Y),
            Point::new(left + width - DIVIDER_INSET, DIVIDER_Y),
        )
        .into_styled(PrimitiveStyle::with_stroke(self.palette.foreground, 1))
        .draw(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{LCD_H, LCD_W},
        ui::tests::FrameBuffer,
    };

    fn draw() -> (FrameBuffer, Background) {
        draw_with(Palette::NORMAL)
    }

    fn draw_with(palette: Palette) -> (FrameBuffer, Background) {
        let mut fb = FrameBuffer::new(LCD_W, LCD_H);
        let bg = Background::new(fb.bounding_box(), palette);
        bg.draw(&mut fb).unwrap();
        (fb, bg)
    }

    #[test]
    fn ring_radii_step_by_ring_and_gap() {
        assert_eq!(Background::ring_radii(), [64, 59, 54]);
    }

    #[test]
    fn rings_alternate_colors() {
        let (fb, bg) = draw();
        let c = bg.center();
        let fg = Palette::NORMAL.foreground;
        let back = Palette::NORMAL.background;

        // Walk up from the center through the three rings
        assert_eq!(fb.pixel(c), Some(back));
        assert_eq!(fb.pixel(c - Point::new(0, 62)), Some(fg));
        assert_eq!(fb.pixel(c - Point::new(0, 60)), Some(back));
        assert_eq!(fb.pixel(c - Point::new(0, 57)), Some(fg));
        assert_eq!(fb.pixel(c - Point::new(0, 55)), Some(back));
        assert_eq!(fb.pixel(c - Point::new(0, 52)), Some(fg));
        assert_eq!(fb.pixel(c - Point::new(0, 48)), Some(back));
        // Outside the outer ring
        assert_eq!(fb.pixel(c - Point::new(0, 66)), Some(back));
    }

    #[test]
    fn face_is_centered_horizontally() {
        let (_, bg) = draw();
        assert_eq!(bg.center(), Point::new(120, 68));
    }

    #[test]
    fn divider_spans_inset_width() {
        let (fb, _) = draw();
        let fg = Palette::NORMAL.foreground;
        assert_eq!(fb.pixel(Point::new(10, DIVIDER_Y)), Some(fg));
        assert_eq!(fb.pixel(Point::new(230, DIVIDER_Y)), Some(fg));
        assert_eq!(fb.pixel(Point::new(9, DIVIDER_Y)), Some(Palette::NORMAL.background));
        assert_eq!(fb.pixel(Point::new(231, DIVIDER_Y)), Some(Palette::NORMAL.background));
    }

    #[test]
    fn inverted_palette_draws_black_rings_on_white() {
        let (fb, bg) = draw_with(Palette::INVERTED);
        let c = bg.center();

        assert_eq!(fb.pixel(Point::zero()), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(c), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(c - Point::new(0, 62)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(c - Point::new(0, 60)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(c - Point::new(0, 52)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(120, DIVIDER_Y)), Some(Rgb565::BLACK));
    }
}
