//! Text labels and date/time formatting

use core::fmt;

use chrono::{Datelike, NaiveDateTime};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use super::Layer;
use crate::{clock::ClockTime, Error};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Abbreviated weekday name
pub fn weekday_abbrev(date: &impl Datelike) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

/// Abbreviated month name
pub fn month_abbrev(date: &impl Datelike) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Format as "Mon, Jan 05"
pub fn format_date<'a>(buf: &'a mut [u8], date: &NaiveDateTime) -> Result<&'a str, Error> {
    format_no_std::show(
        buf,
        format_args!(
            "{}, {} {:02}",
            weekday_abbrev(date),
            month_abbrev(date),
            date.day()
        ),
    )
    .map_err(|_| Error::Format)
}

/// Format as "09:05 PM"
pub fn format_time12<'a>(buf: &'a mut [u8], time: &ClockTime) -> Result<&'a str, Error> {
    let (hour, pm) = time.hour12();
    format_no_std::show(
        buf,
        format_args!(
            "{:02}:{:02} {}",
            hour,
            time.minute(),
            if pm { "PM" } else { "AM" }
        ),
    )
    .map_err(|_| Error::Format)
}

/// Text with its own fixed-size buffer
pub struct Label<const N: usize> {
    str_buf: [u8; N],
    len: usize,
    position: Point,
    character_style: MonoTextStyle<'static, Rgb565>,
    alignment: Alignment,
}

impl<const N: usize> Label<N> {
    /// Create an empty label anchored at `position` (top edge of the text)
    pub fn new(
        position: Point,
        character_style: MonoTextStyle<'static, Rgb565>,
        alignment: Alignment,
    ) -> Self {
        Self {
            str_buf: [0; N],
            len: 0,
            position,
            character_style,
            alignment,
        }
    }

    /// Replace the text. Fails without touching the old text if it does not fit.
    pub fn set_text(&mut self, args: fmt::Arguments) -> Result<(), Error> {
        let mut buf = [0; N];
        let len = format_no_std::show(&mut buf, args)
            .map_err(|_| Error::Format)?
            .len();
        self.str_buf = buf;
        self.len = len;
        Ok(())
    }

    /// Copy in text that was formatted elsewhere
    pub fn set_str(&mut self, text: &str) -> Result<(), Error> {
        self.set_text(format_args!("{}", text))
    }

    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.str_buf[..self.len]).unwrap_or("")
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

impl<const N: usize> Layer for Label<N> {
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let text_style = TextStyleBuilder::new()
            .alignment(self.alignment)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(
            self.text(),
            self.position,
            self.character_style,
            text_style,
        )
        .draw(target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn date_string() {
        let mut buf = [0u8; 12];
        let dt = datetime(2015, 1, 5, 21, 5);
        assert_eq!(format_date(&mut buf, &dt).unwrap(), "Mon, Jan 05");

        let dt = datetime(2024, 12, 29, 0, 0);
        assert_eq!(format_date(&mut buf, &dt).unwrap(), "Sun, Dec 29");
    }

    #[test]
    fn time_string() {
        let mut buf = [0u8; 9];
        let t = ClockTime::new(21, 5, 0).unwrap();
        assert_eq!(format_time12(&mut buf, &t).unwrap(), "09:05 PM");
        let t = ClockTime::new(0, 30, 0).unwrap();
        assert_eq!(format_time12(&mut buf, &t).unwrap(), "12:30 AM");
        let t = ClockTime::new(12, 0, 0).unwrap();
        assert_eq!(format_time12(&mut buf, &t).unwrap(), "12:00 PM");
    }

    #[test]
    fn too_small_buffer_is_an_error() {
        let mut buf = [0u8; 10];
        let dt = datetime(2015, 1, 5, 0, 0);
        assert!(format_date(&mut buf, &dt).is_err());
    }

    #[test]
    fn label_keeps_old_text_on_overflow() {
        let style = MonoTextStyle::new(&FONT_6X10, Rgb565::WHITE);
        let mut label: Label<4> = Label::new(Point::zero(), style, Alignment::Left);
        label.set_text(format_args!("{:02}", 5)).unwrap();
        assert_eq!(label.text(), "05");
        assert!(label.set_str("Tuesday").is_err());
        assert_eq!(label.text(), "05");
    }

    #[test]
    fn weekday_names() {
        let dt = datetime(2015, 1, 10, 0, 0);
        assert_eq!(weekday_abbrev(&dt), "Sat");
        assert_eq!(month_abbrev(&datetime(2015, 9, 1, 0, 0)), "Sep");
    }
}
