//! Date layer
//!
//! Parent of the weekday and day-number labels inside the rings and of the
//! full date line below the time readout.

use chrono::{Datelike, NaiveDateTime};
use embedded_graphics::{
    mono_font::{
        ascii::{FONT_7X13, FONT_7X13_BOLD},
        MonoTextStyle,
    },
    pixelcolor::Rgb565,
    prelude::*,
    text::Alignment,
};

use super::{labels, labels::Label, place, Layer};
use crate::{
    config::{Palette, DATE_LABEL_OFFSET_Y, DATE_LINE_Y},
    Error,
};

/// "Mon"
pub const DAY_BUF_LEN: usize = 6;
/// "05"
pub const NUM_BUF_LEN: usize = 4;
/// "Mon, Jan 05"
pub const DATE_BUF_LEN: usize = 12;

pub struct DateLayer {
    center: Point,
    palette: Palette,
    day_label: Option<Label<DAY_BUF_LEN>>,
    num_label: Option<Label<NUM_BUF_LEN>>,
    date_line: Option<Label<DATE_BUF_LEN>>,
}

impl DateLayer {
    /// Create the layer without any labels
    pub fn new(center: Point, palette: Palette) -> Self {
        Self {
            center,
            palette,
            day_label: None,
            num_label: None,
            date_line: None,
        }
    }

    pub fn add_day_label(&mut self) -> Result<(), Error> {
        let label = Label::new(
            self.center + Point::new(-26, DATE_LABEL_OFFSET_Y),
            MonoTextStyle::new(&FONT_7X13, self.palette.foreground),
            Alignment::Left,
        );
        place(&mut self.day_label, label)
    }

    pub fn add_num_label(&mut self) -> Result<(), Error> {
        let label = Label::new(
            self.center + Point::new(1, DATE_LABEL_OFFSET_Y),
            MonoTextStyle::new(&FONT_7X13_BOLD, self.palette.foreground),
            Alignment::Left,
        );
        place(&mut self.num_label, label)
    }

    pub fn add_date_line(&mut self) -> Result<(), Error> {
        let label = Label::new(
            Point::new(self.center.x, DATE_LINE_Y),
            MonoTextStyle::new(&FONT_7X13, self.palette.foreground),
            Alignment::Center,
        );
        place(&mut self.date_line, label)
    }

    pub fn remove_day_label(&mut self) -> bool {
        self.day_label.take().is_some()
    }

    pub fn remove_num_label(&mut self) -> bool {
        self.num_label.take().is_some()
    }

    pub fn remove_date_line(&mut self) -> bool {
        self.date_line.take().is_some()
    }

    pub fn day_label(&self) -> Option<&Label<DAY_BUF_LEN>> {
        self.day_label.as_ref()
    }

    pub fn num_label(&self) -> Option<&Label<NUM_BUF_LEN>> {
        self.num_label.as_ref()
    }

    pub fn date_line(&self) -> Option<&Label<DATE_BUF_LEN>> {
        self.date_line.as_ref()
    }

    /// Refresh every label from the sampled time
    pub fn update(&mut self, now: &NaiveDateTime) -> Result<(), Error> {
        if let Some(label) = &mut self.day_label {
            label.set_str(labels::weekday_abbrev(now))?;
        }
        if let Some(label) = &mut self.num_label {
            label.set_text(format_args!("{:02}", now.day()))?;
        }
        if let Some(label) = &mut self.date_line {
            let mut buf = [0u8; DATE_BUF_LEN];
            label.set_str(labels::format_date(&mut buf, now)?)?;
        }
        Ok(())
    }
}

impl Layer for DateLayer {
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(label) = &self.day_label {
            label.draw(target)?;
        }
        if let Some(label) = &self.num_label {
            label.draw(target)?;
        }
        if let Some(label) = &self.date_line {
            label.draw(target)?;
        }
        Ok(())
    }
}
