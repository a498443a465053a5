//! Circlock watchface
//!
//! Three rings with notched hands, day and date inside the rings, and a
//! digital time readout, full date and battery bar below the divider.
//!
//! Every layer and hand path sits in its own slot so it can be created and
//! destroyed on its own, in the order the window dictates.

use chrono::NaiveDateTime;
use embedded_graphics::{
    mono_font::MonoTextStyle, pixelcolor::Rgb565, prelude::*, primitives::Rectangle,
    text::Alignment,
};
use profont::PROFONT_24_POINT;

use super::{
    background::Background, battery_bar::BatteryBar, date::DateLayer, hands::Hands, labels,
    labels::Label, place, Layer, WatchFace,
};
use crate::{
    battery::BatteryState,
    clock::ClockTime,
    config::{Palette, TIME_LABEL_Y},
    window::{LayerId, Resource},
    Error,
};

/// "09:05 PM"
pub const TIME_BUF_LEN: usize = 9;

pub struct CirclockFace {
    bounds: Rectangle,
    center: Point,
    palette: Palette,
    battery: BatteryState,
    background: Option<Background>,
    date: Option<DateLayer>,
    hands: Option<Hands>,
    time_label: Option<Label<TIME_BUF_LEN>>,
    battery_bar: Option<BatteryBar>,
}

impl CirclockFace {
    /// Create an empty face. Layers are added with [`CirclockFace::build`].
    pub fn new(bounds: Rectangle, palette: Palette) -> Self {
        Self {
            bounds,
            center: Background::center_for(bounds),
            palette,
            battery: BatteryState::default(),
            background: None,
            date: None,
            hands: None,
            time_label: None,
            battery_bar: None,
        }
    }

    /// Create the layer or path behind `resource`. Subscriptions own nothing
    /// on the face and are accepted as is.
    pub fn build(&mut self, resource: Resource) -> Result<(), Error> {
        match resource {
            Resource::Layer(LayerId::Background) => place(
                &mut self.background,
                Background::new(self.bounds, self.palette),
            ),
            Resource::Layer(LayerId::Date) => {
                place(&mut self.date, DateLayer::new(self.center, self.palette))
            }
            Resource::Layer(LayerId::DayLabel) => self.date_mut()?.add_day_label(),
            Resource::Layer(LayerId::NumLabel) => self.date_mut()?.add_num_label(),
            Resource::Layer(LayerId::DateLine) => self.date_mut()?.add_date_line(),
            Resource::Layer(LayerId::Hands) => {
                place(&mut self.hands, Hands::new(self.center, self.palette))
            }
            Resource::Path(hand) => self
                .hands
                .as_mut()
                .ok_or(Error::MissingParent)?
                .add_path(hand),
            Resource::Layer(LayerId::Time) => place(
                &mut self.time_label,
                Label::new(
                    Point::new(self.center.x, TIME_LABEL_Y),
                    MonoTextStyle::new(&PROFONT_24_POINT, self.palette.foreground),
                    Alignment::Center,
                ),
            ),
            Resource::Layer(LayerId::Battery) => {
                let mut bar = BatteryBar::new(self.bounds, self.palette);
                bar.set_state(self.battery);
                place(&mut self.battery_bar, bar)
            }
            Resource::Subscription(_) => Ok(()),
        }
    }

    /// Destroy the layer or path behind `resource`. Returns whether it existed.
    pub fn destroy(&mut self, resource: Resource) -> bool {
        match resource {
            Resource::Layer(LayerId::Background) => self.background.take().is_some(),
            Resource::Layer(LayerId::Date) => self.date.take().is_some(),
            Resource::Layer(LayerId::DayLabel) => {
                self.date.as_mut().map_or(false, DateLayer::remove_day_label)
            }
            Resource::Layer(LayerId::NumLabel) => {
                self.date.as_mut().map_or(false, DateLayer::remove_num_label)
            }
            Resource::Layer(LayerId::DateLine) => {
                self.date.as_mut().map_or(false, DateLayer::remove_date_line)
            }
            Resource::Layer(LayerId::Hands) => self.hands.take().is_some(),
            Resource::Path(hand) => self
                .hands
                .as_mut()
                .map_or(false, |hands| hands.remove_path(hand)),
            Resource::Layer(LayerId::Time) => self.time_label.take().is_some(),
            Resource::Layer(LayerId::Battery) => self.battery_bar.take().is_some(),
            Resource::Subscription(_) => false,
        }
    }

    /// Whether the layer or path behind `resource` currently exists
    pub fn holds(&self, resource: Resource) -> bool {
        match resource {
            Resource::Layer(LayerId::Background) => self.background.is_some(),
            Resource::Layer(LayerId::Date) => self.date.is_some(),
            Resource::Layer(LayerId::DayLabel) => {
                self.date().map_or(false, |date| date.day_label().is_some())
            }
            Resource::Layer(LayerId::NumLabel) => {
                self.date().map_or(false, |date| date.num_label().is_some())
            }
            Resource::Layer(LayerId::DateLine) => {
                self.date().map_or(false, |date| date.date_line().is_some())
            }
            Resource::Layer(LayerId::Hands) => self.hands.is_some(),
            Resource::Path(hand) => self
                .hands()
                .map_or(false, |hands| hands.path(hand).is_some()),
            Resource::Layer(LayerId::Time) => self.time_label.is_some(),
            Resource::Layer(LayerId::Battery) => self.battery_bar.is_some(),
            Resource::Subscription(_) => false,
        }
    }

    fn date_mut(&mut self) -> Result<&mut DateLayer, Error> {
        self.date.as_mut().ok_or(Error::MissingParent)
    }

    pub fn date(&self) -> Option<&DateLayer> {
        self.date.as_ref()
    }

    pub fn time_label(&self) -> Option<&Label<TIME_BUF_LEN>> {
        self.time_label.as_ref()
    }

    pub fn hands(&self) -> Option<&Hands> {
        self.hands.as_ref()
    }

    pub fn battery_bar(&self) -> Option<&BatteryBar> {
        self.battery_bar.as_ref()
    }
}

impl WatchFace for CirclockFace {
    fn update_time(&mut self, now: &NaiveDateTime) -> Result<(), Error> {
        let time = ClockTime::from_datetime(now);
        trace!(
            "Face time {}:{}:{}",
            time.hour(),
            time.minute(),
            time.second()
        );

        if let Some(date) = &mut self.date {
            date.update(now)?;
        }
        if let Some(hands) = &mut self.hands {
            hands.update(&time);
        }
        if let Some(label) = &mut self.time_label {
            let mut buf = [0u8; TIME_BUF_LEN];
            label.set_str(labels::format_time12(&mut buf, &time)?)?;
        }
        Ok(())
    }

    fn update_battery(&mut self, state: BatteryState) {
        self.battery = state;
        if let Some(bar) = &mut self.battery_bar {
            bar.set_state(state);
        }
    }
}

impl Layer for CirclockFace {
    /// Draw back to front
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(background) = &self.background {
            background.draw(target)?;
        }
        if let Some(date) = &self.date {
            date.draw(target)?;
        }
        if let Some(hands) = &self.hands {
            hands.draw(target)?;
        }
        if let Some(label) = &self.time_label {
            label.draw(target)?;
        }
        if let Some(bar) = &self.battery_bar {
            bar.draw(target)?;
        }
        Ok(())
    }
}
