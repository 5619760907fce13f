#![allow(dead_code)]

pub mod bitmap;
pub mod console;
pub mod driver;
pub mod panel;
pub mod render;

#[cfg(test)]
pub mod testing;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoFont},
    pixelcolor::BinaryColor,
};
use profont::{PROFONT_7_POINT, PROFONT_9_POINT};

pub use bitmap::Bitmap;
pub use driver::{DisplayDriver, DisplayError};
pub use render::{Renderer, TextRenderer};

pub const COLOR_BG: BinaryColor = BinaryColor::Off;
pub const COLOR_FG: BinaryColor = BinaryColor::On;

pub const STROKE_WIDTH: u32 = 1;

pub const HEADER_FONT: &MonoFont<'static> = &PROFONT_9_POINT;
pub const BODY_FONT: &MonoFont<'static> = &FONT_6X10;
pub const FOOTER_FONT: &MonoFont<'static> = &PROFONT_7_POINT;

/// Background and foreground colour for one frame.
pub const fn palette(inverted: bool) -> (BinaryColor, BinaryColor) {
    if inverted {
        (COLOR_FG, COLOR_BG)
    } else {
        (COLOR_BG, COLOR_FG)
    }
}

/// Everything the renderer needs to produce one screen.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Frame {
    pub header: String,
    pub body: String,
    pub footer: String,
    pub inverted: bool,
}

impl Frame {
    pub fn new(
        header: impl Into<String>,
        body: impl Into<String>,
        footer: impl Into<String>,
        inverted: bool,
    ) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
            footer: footer.into(),
            inverted,
        }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} {:?} [{}]{}",
            self.header,
            self.body,
            self.footer,
            if self.inverted { " inverted" } else { "" }
        )
    }
}
