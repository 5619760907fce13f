use debug_print::debug_println;

use crate::log;

use super::{Bitmap, DisplayDriver, DisplayError};

/// Stand-in for a panel, prints what would have been shown.
#[derive(Default)]
pub struct ConsoleDriver {
    frames: u64,
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl DisplayDriver for ConsoleDriver {
    fn clear(&mut self, inverted: bool) -> Result<(), DisplayError> {
        debug_println!("{} Clear (inverted: {})", log::SCREEN, inverted);
        Ok(())
    }

    fn show(&mut self, bitmap: &Bitmap) -> Result<(), DisplayError> {
        self.frames += 1;
        println!(
            "{} Frame {} ({} lit pixels)",
            log::SCREEN,
            self.frames,
            bitmap.lit_count()
        );
        debug_println!("{}", bitmap.to_ascii());
        Ok(())
    }
}
