use crate::config::Config;
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::device_input::{impl_fake::DeviceInputFake, interface::Command};
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::library::logger::impl_fake::LoggerFake;
use crate::scanner::main::Scanner;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct Fixture {
    pub logger: LoggerFake,
    pub device_display: DeviceDisplayFake,
    pub scanner: Scanner,
}

impl Fixture {
    pub fn new(script: Vec<(Duration, Command)>) -> Self {
        Self::build(script, false)
    }

    pub fn with_camera_denied(script: Vec<(Duration, Command)>) -> Self {
        Self::build(script, true)
    }

    fn build(script: Vec<(Duration, Command)>, camera_denied: bool) -> Self {
        let config = Config {
            tick_rate: Duration::from_millis(10),
            fake_device_delay: Duration::ZERO,
            ..Config::default()
        };
        let logger = LoggerFake::new();
        let mut device_camera = DeviceCameraFake::new(Arc::new(logger.clone()), Duration::ZERO);
        if camera_denied {
            device_camera = device_camera.with_access_denied();
        }
        let device_display = DeviceDisplayFake::new();
        let device_input = DeviceInputFake::new(script);
        let image_classifier =
            ImageClassifierFake::new(&config.catalog, Arc::new(logger.clone()), Duration::ZERO)
                .with_favourite("banana");

        let scanner = Scanner::new(
            config,
            Arc::new(logger.clone()),
            Arc::new(device_camera),
            Arc::new(Mutex::new(device_display.clone())),
            Arc::new(device_input),
            Arc::new(image_classifier),
        );

        Self {
            logger,
            device_display,
            scanner,
        }
    }
}
