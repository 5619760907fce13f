use thiserror::Error;

use super::Bitmap;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    #[error("Could not initialise display: {0}")]
    Init(String),
    #[error("Display bus write failed: {0}")]
    Bus(String),
    #[error("Unsupported display size {0}x{1}")]
    UnsupportedSize(u32, u32),
}

/// Physical panel. Both calls block until the bus write is done.
pub trait DisplayDriver {
    /// Fill the panel with the background of the given inversion state.
    fn clear(&mut self, inverted: bool) -> Result<(), DisplayError>;

    /// Push a full frame to the panel.
    fn show(&mut self, bitmap: &Bitmap) -> Result<(), DisplayError>;
}

impl<T: DisplayDriver + ?Sized> DisplayDriver for Box<T> {
    fn clear(&mut self, inverted: bool) -> Result<(), DisplayError> {
        (**self).clear(inverted)
    }

    fn show(&mut self, bitmap: &Bitmap) -> Result<(), DisplayError> {
        (**self).show(bitmap)
    }
}
