use std::sync::{Arc, Mutex};

use super::{Bitmap, DisplayDriver, DisplayError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    Clear(bool),
    Show(Bitmap),
}

/// Driver that remembers every call. Clones share the same log, so a test can
/// keep one handle and give the other to the cycler.
#[derive(Clone, Default)]
pub struct RecordingDriver {
    calls: Arc<Mutex<Vec<DriverCall>>>,
    failures: Arc<Mutex<u32>>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn shows(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, DriverCall::Show(_)))
            .count()
    }

    /// Makes the next `n` calls to `show` fail like a broken bus.
    pub fn fail_next_shows(&self, n: u32) {
        *self.failures.lock().unwrap() = n;
    }
}

impl DisplayDriver for RecordingDriver {
    fn clear(&mut self, inverted: bool) -> Result<(), DisplayError> {
        self.calls.lock().unwrap().push(DriverCall::Clear(inverted));
        Ok(())
    }

    fn show(&mut self, bitmap: &Bitmap) -> Result<(), DisplayError> {
        let mut failures = self.failures.lock().unwrap();
        if *failures > 0 {
            *failures -= 1;
            return Err(DisplayError::Bus("simulated NACK".to_string()));
        }
        self.calls
            .lock()
            .unwrap()
            .push(DriverCall::Show(bitmap.clone()));
        Ok(())
    }
}
