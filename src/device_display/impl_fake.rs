use crate::device_display::interface::{DeviceDisplay, Screen};
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Records every drawn screen; clones share the same record.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct DeviceDisplayFake {
    screens: Arc<Mutex<Vec<Screen>>>,
}

#[allow(dead_code)]
impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_screen(&self) -> Option<Screen> {
        self.screens
            .lock()
            .ok()
            .and_then(|screens| screens.last().cloned())
    }

    #[allow(dead_code)]
    pub fn screen_count(&self) -> usize {
        self.screens.lock().map(|screens| screens.len()).unwrap_or(0)
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn draw(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.screens
            .lock()
            .map_err(|e| e.to_string())?
            .push(screen.clone());
        Ok(())
    }
}
