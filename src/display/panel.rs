use embedded_graphics::prelude::DrawTarget;
use linux_embedded_hal::I2cdev;
use ssd1306::{
    mode::BufferedGraphicsMode, prelude::*, size::DisplaySize, I2CDisplayInterface, Ssd1306,
};

use crate::log;

use super::{palette, Bitmap, DisplayDriver, DisplayError};

type Panel<SIZE> = Ssd1306<I2CInterface<I2cdev>, SIZE, BufferedGraphicsMode<SIZE>>;

/// SSD1306 OLED on a Linux I2C bus, e.g. `/dev/i2c-1` at `0x3C`.
pub struct Ssd1306Driver<SIZE: DisplaySize> {
    display: Panel<SIZE>,
}

impl<SIZE: DisplaySize> Ssd1306Driver<SIZE> {
    pub fn open(bus: &str, address: u8, size: SIZE) -> Result<Self, DisplayError> {
        println!("{} Opening SSD1306 on {} @ {:#04x}", log::SCREEN, bus, address);

        let i2c = I2cdev::new(bus).map_err(|e| DisplayError::Init(e.to_string()))?;
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);

        let mut display =
            Ssd1306::new(interface, size, DisplayRotation::Rotate0).into_buffered_graphics_mode();
        display
            .init()
            .map_err(|e| DisplayError::Init(format!("{:?}", e)))?;

        Ok(Self { display })
    }
}

impl<SIZE: DisplaySize> DisplayDriver for Ssd1306Driver<SIZE> {
    fn clear(&mut self, inverted: bool) -> Result<(), DisplayError> {
        let (bg, _) = palette(inverted);
        DrawTarget::clear(&mut self.display, bg).map_err(|e| DisplayError::Bus(format!("{:?}", e)))
    }

    fn show(&mut self, bitmap: &Bitmap) -> Result<(), DisplayError> {
        self.display
            .draw_iter(bitmap.pixels())
            .map_err(|e| DisplayError::Bus(format!("{:?}", e)))?;
        self.display
            .flush()
            .map_err(|e| DisplayError::Bus(format!("{:?}", e)))
    }
}

/// Opens the panel matching the configured geometry.
pub fn open(
    bus: &str,
    address: u8,
    width: u32,
    height: u32,
) -> Result<Box<dyn DisplayDriver + Send>, DisplayError> {
    match (width, height) {
        (128, 32) => Ok(Box::new(Ssd1306Driver::open(bus, address, DisplaySize128x32)?)),
        (128, 64) => Ok(Box::new(Ssd1306Driver::open(bus, address, DisplaySize128x64)?)),
        (w, h) => Err(DisplayError::UnsupportedSize(w, h)),
    }
}
