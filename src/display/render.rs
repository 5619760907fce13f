use core::convert::Infallible;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use super::{palette, Bitmap, Frame, BODY_FONT, FOOTER_FONT, HEADER_FONT, STROKE_WIDTH};

/// Turns a frame into pixels. Implementations must be deterministic.
pub trait Renderer {
    fn render(&self, frame: &Frame) -> Bitmap;
}

/// Header on top with a rule under it, body below the rule and the footer in
/// the bottom right corner.
pub struct TextRenderer {
    size: Size,
}

impl TextRenderer {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    fn draw<D>(&self, frame: &Frame, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = embedded_graphics::pixelcolor::BinaryColor>,
    {
        let (bg, fg) = palette(frame.inverted);
        target.clear(bg)?;

        let width = self.size.width as i32;
        let height = self.size.height as i32;
        let rule_y = HEADER_FONT.character_size.height as i32 + 1;

        Text::with_baseline(
            &frame.header,
            Point::zero(),
            MonoTextStyle::new(HEADER_FONT, fg),
            Baseline::Top,
        )
        .draw(target)?;

        Line::new(Point::new(0, rule_y), Point::new(width - 1, rule_y))
            .into_styled(PrimitiveStyle::with_stroke(fg, STROKE_WIDTH))
            .draw(target)?;

        Text::with_baseline(
            &frame.body,
            Point::new(0, rule_y + 2),
            MonoTextStyle::new(BODY_FONT, fg),
            Baseline::Top,
        )
        .draw(target)?;

        let footer_style = TextStyleBuilder::new()
            .alignment(Alignment::Right)
            .baseline(Baseline::Bottom)
            .build();
        Text::with_text_style(
            &frame.footer,
            Point::new(width - 1, height - 1),
            MonoTextStyle::new(FOOTER_FONT, fg),
            footer_style,
        )
        .draw(target)?;

        Ok(())
    }
}

impl Renderer for TextRenderer {
    fn render(&self, frame: &Frame) -> Bitmap {
        let mut bitmap = Bitmap::new(self.size);
        let drawn: Result<(), Infallible> = self.draw(frame, &mut bitmap);
        if let Err(never) = drawn {
            match never {}
        }
        bitmap
    }
}
