use crate::device_display::interface::{DeviceDisplay, Screen, Theme};
use std::error::Error;

const WIDTH: usize = 48;

pub struct DeviceDisplayConsole {
    last_screen: Option<Screen>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self { last_screen: None }
    }

    fn row(text: &str) -> String {
        let clipped: String = text.chars().take(WIDTH).collect();
        format!("│{:<width$}│", clipped, width = WIDTH)
    }

    fn render_display(screen: &Screen) {
        let border = "─".repeat(WIDTH);
        let theme = match screen.theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };

        println!("┌{}┐", border);
        println!("{}", Self::row(&format!("{} [{}]", screen.header, theme)));
        for section in &screen.sections {
            println!("├{}┤", border);
            println!("{}", Self::row(&section.title));
            for line in &section.lines {
                println!("{}", Self::row(&format!("  {}", line)));
            }
        }
        if let Some(alert) = &screen.alert {
            println!("├{}┤", border);
            let mark = if alert.positive { "+" } else { "-" };
            println!("{}", Self::row(&format!("({}) {}", mark, alert.message)));
        }
        if let Some(notice) = &screen.notice {
            println!("├{}┤", border);
            println!("{}", Self::row(&format!("! {}", notice)));
        }
        println!("└{}┘", border);
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn draw(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        if self.last_screen.as_ref() == Some(screen) {
            return Ok(());
        }
        Self::render_display(screen);
        self.last_screen = Some(screen.clone());
        Ok(())
    }
}
