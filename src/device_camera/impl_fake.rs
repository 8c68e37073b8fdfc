use crate::device_camera::interface::{DeviceCamera, Frame};
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    delay: Duration,
    access_denied: bool,
    started: AtomicBool,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, delay: Duration) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            delay,
            access_denied: false,
            started: AtomicBool::new(false),
        }
    }

    /// Every `start` call fails as if the user refused camera permission.
    #[allow(dead_code)]
    pub fn with_access_denied(mut self) -> Self {
        self.access_denied = true;
        self
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        std::thread::sleep(self.delay);
        if self.access_denied {
            return Err("camera permission denied".into());
        }
        self.started.store(true, Ordering::SeqCst);
        self.logger.info("Camera started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        self.started.store(false, Ordering::SeqCst);
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<Frame, Box<dyn std::error::Error + Send + Sync>> {
        if !self.started.load(Ordering::SeqCst) {
            return Err("camera is not started".into());
        }
        Ok(Frame::blank(100, 100))
    }
}
