//! Watchface layout and color configuration

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Display width in pixels
pub const LCD_W: u32 = 240;
/// Display height in pixels
pub const LCD_H: u32 = 240;

/// Radius of the outermost ring
pub const CLOCK_RADIUS: u32 = 64;

/// Width of a hand notch
pub const HAND_WIDTH: i32 = 8;
/// Thickness of a ring, and the radial length of a hand notch
pub const HAND_HEIGHT: i32 = 4;
/// Gap between two rings
pub const HAND_MARGIN: i32 = 1;

/// Vertical center of the rings
pub const CLOCK_CENTER_Y: i32 = CLOCK_RADIUS as i32 + HAND_HEIGHT;

/// Number of concentric rings
pub const RING_COUNT: usize = 3;

/// Horizontal inset of the divider line
pub const DIVIDER_INSET: i32 = 10;

/// Day and day-number labels sit this far below the ring center
pub const DATE_LABEL_OFFSET_Y: i32 = 6;

/// Divider line, time label, date line and battery bar rows
pub const DIVIDER_Y: i32 = 2 * CLOCK_CENTER_Y;
pub const TIME_LABEL_Y: i32 = DIVIDER_Y + 8;
pub const DATE_LINE_Y: i32 = DIVIDER_Y + 42;
pub const BATTERY_BAR_Y: i32 = DIVIDER_Y + 62;

/// Battery bar geometry
pub const BATTERY_SEGMENTS: u8 = 20;
pub const BATTERY_SEGMENT_W: u32 = 8;
pub const BATTERY_SEGMENT_H: u32 = 6;
pub const BATTERY_SEGMENT_GAP: u32 = 2;
pub const BATTERY_SEGMENT_CORNER: u32 = 2;

/// Foreground and background colors of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgb565,
    pub background: Rgb565,
}

impl Palette {
    /// White rings on a black face
    pub const NORMAL: Self = Self {
        foreground: Rgb565::WHITE,
        background: Rgb565::BLACK,
    };

    /// Black rings on a white face
    pub const INVERTED: Self = Self {
        foreground: Rgb565::BLACK,
        background: Rgb565::WHITE,
    };
}

/// Palette selected at compile time
#[cfg(not(feature = "invert-colors"))]
pub const PALETTE: Palette = Palette::NORMAL;
#[cfg(feature = "invert-colors")]
pub const PALETTE: Palette = Palette::INVERTED;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_swap_colors() {
        assert_eq!(Palette::INVERTED.foreground, Palette::NORMAL.background);
        assert_eq!(Palette::INVERTED.background, Palette::NORMAL.foreground);
    }

    #[cfg(feature = "invert-colors")]
    #[test]
    fn invert_colors_selects_inverted_palette() {
        assert_eq!(PALETTE, Palette::INVERTED);
    }

    #[cfg(not(feature = "invert-colors"))]
    #[test]
    fn default_palette_is_white_on_black() {
        assert_eq!(PALETTE, Palette::NORMAL);
    }
}
