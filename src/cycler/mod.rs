pub mod thread;

use debug_print::debug_println;

use crate::{
    display::{DisplayDriver, DisplayError, Frame, Renderer},
    log,
    state::MessageStore,
};

pub const BANNER_HEADER: &str = "oled-status";
pub const BOOT_FOOTER: &str = "SERVER STARTED";
pub const PLACEHOLDER_BODY: &str = "No Messages";
pub const PLACEHOLDER_FOOTER: &str = "0/0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorPosition {
    #[default]
    Empty,
    Showing(usize),
}

/// Which message is on screen and whether the panel is inverted. Only the
/// cycler ever touches this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    position: CursorPosition,
    inverted: bool,
}

impl CursorState {
    #[cfg(test)]
    pub fn position(&self) -> CursorPosition {
        self.position
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// Moves to the next message of a store holding `count` entries and returns
    /// its index, or `None` when there is nothing to show. An index left out of
    /// range by deletes wraps back to the first message.
    pub fn advance(&mut self, count: usize) -> Option<usize> {
        if count == 0 {
            self.position = CursorPosition::Empty;
            return None;
        }

        let next = match self.position {
            CursorPosition::Empty => 0,
            CursorPosition::Showing(index) => index + 1,
        };
        let next = if next >= count { 0 } else { next };

        self.position = CursorPosition::Showing(next);
        self.inverted = !self.inverted;
        Some(next)
    }
}

pub struct Cycler<R: Renderer, D: DisplayDriver> {
    store: MessageStore,
    renderer: R,
    driver: D,
    cursor: CursorState,
    version: String,
}

impl<R: Renderer, D: DisplayDriver> Cycler<R, D> {
    pub fn new(store: MessageStore, renderer: R, driver: D, version: impl Into<String>) -> Self {
        Self {
            store,
            renderer,
            driver,
            cursor: CursorState::default(),
            version: version.into(),
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    #[cfg(test)]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn boot_frame(&self) -> Frame {
        Frame::new(
            BANNER_HEADER,
            format!("v. {}", self.version),
            BOOT_FOOTER,
            false,
        )
    }

    /// Paints the one-off boot banner.
    pub fn boot(&mut self) -> Result<Frame, DisplayError> {
        let frame = self.boot_frame();
        println!("{} Boot banner {}", log::SCREEN, frame);
        self.paint(&frame)?;
        Ok(frame)
    }

    /// One period of the rotation: snapshot, advance, repaint. The cursor moves
    /// even when the paint fails, so a broken frame is skipped, not retried.
    pub async fn tick(&mut self) -> Result<Frame, DisplayError> {
        let snapshot = self.store.snapshot().await;

        let frame = match self.cursor.advance(snapshot.len()) {
            None => Frame::new(BANNER_HEADER, PLACEHOLDER_BODY, PLACEHOLDER_FOOTER, false),
            Some(index) => {
                let (_, message) = &snapshot[index];
                debug_println!("{} Showing {} of {}", log::CYCLE, index + 1, snapshot.len());
                Frame::new(
                    &message.header,
                    &message.body,
                    format!("{}/{}", index + 1, snapshot.len()),
                    self.cursor.inverted(),
                )
            }
        };

        self.paint(&frame)?;
        Ok(frame)
    }

    fn paint(&mut self, frame: &Frame) -> Result<(), DisplayError> {
        let bitmap = self.renderer.render(frame);
        // Clearing to the frame's own background avoids a flash when inverted.
        self.driver.clear(frame.inverted)?;
        self.driver.show(&bitmap)
    }
}
