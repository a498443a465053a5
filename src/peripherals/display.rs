//! Display control module for PineTime

use circlock::config::{LCD_H, LCD_W};
use display_interface_spi::SPIInterface;
use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26, SPI2},
    spim::Spim,
};
use embassy_time::Delay;
use mipidsi::{models::ST7789, Builder, Orientation};

/// ST7789 driven over SPIM2
pub type Lcd = mipidsi::Display<
    SPIInterface<Spim<'static, SPI2>, Output<'static, P0_18>, Output<'static, P0_25>>,
    ST7789,
    Output<'static, P0_26>,
>;

pub struct Display {
    lcd: Lcd,
}

impl Display {
    /// Configure display settings on boot
    pub fn init(
        spim: Spim<'static, SPI2>,
        cs_pin: Output<'static, P0_25>,
        dc_pin: Output<'static, P0_18>,
        rst_pin: Output<'static, P0_26>,
    ) -> Result<Self, Error> {
        let lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(LCD_W as u16, LCD_H as u16)
            .with_orientation(Orientation::Portrait(false))
            .init(&mut Delay, Some(rst_pin))
            .map_err(|_| Error::Init)?;

        Ok(Self { lcd })
    }

    /// Draw target for the watchface
    pub fn lcd(&mut self) -> &mut Lcd {
        &mut self.lcd
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    Init,
}
