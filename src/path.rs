//! Rotatable four-point paths

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Triangle},
};

use crate::trig::{cos_lookup, sin_lookup, Angle, TRIG_MAX_RATIO};

/// Quadrilateral that is rotated around its origin and then moved by an
/// offset. Points are kept in their unrotated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandPath {
    points: [Point; 4],
    offset: Point,
    rotation: Angle,
}

impl HandPath {
    pub fn new(points: [Point; 4]) -> Self {
        Self {
            points,
            offset: Point::zero(),
            rotation: Angle::ZERO,
        }
    }

    /// Set the absolute rotation
    pub fn rotate_to(&mut self, angle: Angle) {
        self.rotation = angle;
    }

    /// Set the absolute offset
    pub fn move_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Points after rotation and offset, in screen coordinates
    pub fn transformed_points(&self) -> [Point; 4] {
        let cos = cos_lookup(self.rotation);
        let sin = sin_lookup(self.rotation);
        self.points.map(|p| {
            Point::new(
                p.x * cos / TRIG_MAX_RATIO - p.y * sin / TRIG_MAX_RATIO + self.offset.x,
                p.y * cos / TRIG_MAX_RATIO + p.x * sin / TRIG_MAX_RATIO + self.offset.y,
            )
        })
    }

    /// Fill the path, split into two triangles along its first diagonal
    pub fn draw_filled<D>(&self, target: &mut D, color: Rgb565) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let [a, b, c, d] = self.transformed_points();
        let style = PrimitiveStyle::with_fill(color);
        Triangle::new(a, b, c).into_styled(style).draw(target)?;
        Triangle::new(a, c, d).into_styled(style).draw(target)
    }
}

#[cfg(test)]
impl Drop for HandPath {
    fn drop(&mut self) {
        tests::DROPPED.with(|dropped| dropped.borrow_mut().push(self.points[0].y));
    }
}
