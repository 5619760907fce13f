use core::convert::TryInto;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

/// Fixed size monochrome framebuffer the renderer draws into.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Bitmap {
    size: Size,
    /// Row major, one entry per pixel, `true` is lit
    pixels: Vec<bool>,
}

impl Bitmap {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![false; size.width as usize * size.height as usize],
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (x, y): (u32, u32) = point.try_into().ok()?;
        if x < self.size.width && y < self.size.height {
            Some(y as usize * self.size.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn pixel(&self, point: Point) -> Option<BinaryColor> {
        self.index(point).map(|i| self.pixels[i].into())
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p).count()
    }

    /// Every pixel of the bitmap, ready for another `DrawTarget`.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel<BinaryColor>> + '_ {
        let width = self.size.width as usize;
        self.pixels.iter().enumerate().map(move |(i, lit)| {
            let point = Point::new((i % width) as i32, (i / width) as i32);
            Pixel(point, BinaryColor::from(*lit))
        })
    }

    /// Text dump for the console driver, `#` for lit pixels.
    pub fn to_ascii(&self) -> String {
        let width = self.size.width as usize;
        let mut out = String::with_capacity(self.pixels.len() + self.size.height as usize);
        for row in self.pixels.chunks(width) {
            out.extend(row.iter().map(|lit| if *lit { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}

impl DrawTarget for Bitmap {
    type Color = BinaryColor;
    // Drawing only touches memory, it can never fail.
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels.into_iter() {
            // Out of bounds pixels must be discarded, not reported.
            if let Some(index) = self.index(coord) {
                self.pixels[index] = color.is_on();
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color.is_on());
        Ok(())
    }
}

impl OriginDimensions for Bitmap {
    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

    #[test]
    fn starts_blank() {
        let bitmap = Bitmap::new(Size::new(16, 8));
        assert_eq!(bitmap.size(), Size::new(16, 8));
        assert_eq!(bitmap.lit_count(), 0);
    }

    #[test]
    fn wide_bitmaps_index_the_last_pixel() {
        let mut bitmap = Bitmap::new(Size::new(70_000, 2));
        let last = Point::new(69_999, 1);

        bitmap.draw_iter([Pixel(last, BinaryColor::On)]).unwrap();
        assert_eq!(bitmap.pixel(last), Some(BinaryColor::On));
        assert_eq!(bitmap.pixel(Point::new(70_000, 1)), None);
        assert_eq!(bitmap.lit_count(), 1);
    }

    #[test]
    fn out_of_bounds_pixels_are_discarded() -> Result<(), core::convert::Infallible> {
        let mut bitmap = Bitmap::new(Size::new(4, 4));

        Line::new(Point::new(-2, 1), Point::new(10, 1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut bitmap)?;

        assert_eq!(bitmap.lit_count(), 4);
        assert_eq!(bitmap.pixel(Point::new(3, 1)), Some(BinaryColor::On));
        assert_eq!(bitmap.pixel(Point::new(3, 2)), Some(BinaryColor::Off));
        assert_eq!(bitmap.pixel(Point::new(4, 1)), None);
        Ok(())
    }

    #[test]
    fn clear_fills_everything() -> Result<(), core::convert::Infallible> {
        let mut bitmap = Bitmap::new(Size::new(3, 2));
        bitmap.clear(BinaryColor::On)?;
        assert_eq!(bitmap.lit_count(), 6);
        Ok(())
    }

    #[test]
    fn pixels_round_trip_into_another_target() -> Result<(), core::convert::Infallible> {
        let mut source = Bitmap::new(Size::new(5, 5));
        Rectangle::new(Point::new(1, 1), Size::new(2, 3))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut source)?;

        let mut copy = Bitmap::new(Size::new(5, 5));
        copy.draw_iter(source.pixels())?;
        assert_eq!(copy, source);
        Ok(())
    }

    #[test]
    fn ascii_dump_has_one_line_per_row() {
        let mut bitmap = Bitmap::new(Size::new(3, 2));
        bitmap
            .draw_iter([Pixel(Point::new(1, 0), BinaryColor::On)])
            .unwrap();
        assert_eq!(bitmap.to_ascii(), ".#.\n...\n");
    }
}
