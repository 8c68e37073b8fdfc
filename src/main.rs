use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use device_input::impl_console::{DeviceInputConsole, HELP};
use image_classifier::impl_fake::ImageClassifierFake;
use library::logger::impl_console::LoggerConsole;
use scanner::main::Scanner;
use std::sync::{Arc, Mutex};

mod catalog;
mod config;
mod device_camera;
mod device_display;
mod device_input;
mod error;
mod image_classifier;
mod library;
mod prediction;
mod scanner;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(
        logger.clone(),
        config.fake_device_delay,
    ));

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> = if config.use_gui_display {
        Arc::new(Mutex::new(DeviceDisplayGui::new()))
    } else {
        Arc::new(Mutex::new(DeviceDisplayConsole::new()))
    };

    let device_input = Arc::new(DeviceInputConsole::new());

    let image_classifier = Arc::new(ImageClassifierFake::new(
        &config.catalog,
        logger.clone(),
        config.fake_device_delay,
    ));

    let scanner = Scanner::new(
        config,
        logger,
        device_camera,
        device_display,
        device_input,
        image_classifier,
    );

    println!("{}", HELP);

    scanner.run()?;

    Ok(())
}
