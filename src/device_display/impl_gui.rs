use crate::device_display::interface::{DeviceDisplay, Screen, Theme};
use eframe::egui;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Clone)]
struct DisplayWindow {
    screen: Arc<Mutex<Screen>>,
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Ok(screen) = self.screen.lock().map(|screen| screen.clone()) else {
            return;
        };

        match screen.theme {
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&screen.header);

            if let Some(notice) = &screen.notice {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::from_rgb(200, 60, 60), notice);
            }

            if let Some(alert) = &screen.alert {
                let color = if alert.positive {
                    egui::Color32::from_rgb(40, 150, 70)
                } else {
                    egui::Color32::from_rgb(200, 60, 60)
                };
                ui.add_space(8.0);
                ui.colored_label(color, &alert.message);
            }

            for section in &screen.sections {
                ui.separator();
                ui.label(egui::RichText::new(&section.title).strong().size(16.0));
                for line in &section.lines {
                    ui.label(egui::RichText::new(line).monospace());
                }
            }
        });

        // Screens are pushed from the event loop thread.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

pub struct DeviceDisplayGui {
    screen: Arc<Mutex<Screen>>,
}

impl DeviceDisplayGui {
    pub fn new() -> Self {
        let screen = Arc::new(Mutex::new(Screen::default()));
        let window = DisplayWindow {
            screen: screen.clone(),
        };

        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([480.0, 640.0])
                    .with_resizable(true),
                ..Default::default()
            };

            // Blocks this thread until the window is closed.
            let _ = eframe::run_native("Best Match", options, Box::new(|_cc| Box::new(window)));
        });

        Self { screen }
    }
}

impl DeviceDisplay for DeviceDisplayGui {
    fn draw(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut current = self.screen.lock().map_err(|e| e.to_string())?;
        *current = screen.clone();
        Ok(())
    }
}
