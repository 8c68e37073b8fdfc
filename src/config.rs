use crate::catalog::Catalog;
use chrono::Offset;
use std::ops::Range;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub tick_rate: Duration,
    pub logger_timezone: chrono::FixedOffset,
    pub feedback_alert_duration: Duration,
    /// Hours (wrapping past midnight) rendered with the dark theme.
    pub night_hours: Range<u32>,
    pub fake_device_delay: Duration,
    pub use_gui_display: bool,
    pub catalog: Catalog,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            logger_timezone: mountain_standard_time(),
            feedback_alert_duration: Duration::from_secs(3),
            night_hours: 18..5,
            fake_device_delay: Duration::from_millis(500),
            use_gui_display: false,
            catalog: Catalog::default(),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap_or(chrono::Utc.fix())
}
