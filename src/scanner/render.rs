use super::core::{CameraState, Model, SessionState};
use crate::catalog::Catalog;
use crate::config::Config;
use crate::device_display::interface::{Alert, DeviceDisplay, Screen, Section, Theme};
use crate::prediction::{average, SessionSummary};
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use std::ops::Range;
use std::sync::{Arc, Mutex};

pub const TITLE: &str = "Best Match";

const INFO_LINES: [&str; 3] = [
    "Hold an item up to the webcam and press start.",
    "Each frame is scored against every catalog item;",
    "on stop, the highest average score is recommended.",
];

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    config: Config,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>, config: Config) -> Self {
        Self {
            device_display,
            config,
        }
    }

    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let now = Utc::now().with_timezone(&self.config.logger_timezone);
        let screen = screen(&self.config, model, now);
        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;
        device_display.draw(&screen)
    }
}

pub fn screen(config: &Config, model: &Model, now: DateTime<FixedOffset>) -> Screen {
    let (header, theme) = header(now, &config.night_hours);
    let mut sections = vec![webcam_section(model), prediction_section(model)];

    if model.panels.labels_visible {
        sections.push(labels_section(&config.catalog, model));
    }

    if let Some(summary) = model.last_summary() {
        sections.push(recommendation_section(&config.catalog, summary));
    }

    if model.panels.info_visible {
        sections.push(Section {
            title: "Info".to_string(),
            lines: INFO_LINES.iter().map(|line| line.to_string()).collect(),
        });
    }

    Screen {
        header,
        theme,
        sections,
        notice: model.notice.as_ref().map(|notice| notice.to_string()),
        alert: model.feedback.as_ref().map(|feedback| Alert {
            message: feedback.message().to_string(),
            positive: feedback.liked,
        }),
    }
}

pub fn header(now: DateTime<FixedOffset>, night_hours: &Range<u32>) -> (String, Theme) {
    let theme = if is_night(now.hour(), night_hours) {
        Theme::Dark
    } else {
        Theme::Light
    };
    (format!("{} | {}", TITLE, now.format("%A, %H:%M")), theme)
}

fn is_night(hour: u32, night_hours: &Range<u32>) -> bool {
    if night_hours.start <= night_hours.end {
        night_hours.contains(&hour)
    } else {
        hour >= night_hours.start || hour < night_hours.end
    }
}

fn webcam_section(model: &Model) -> Section {
    let line = match model.camera {
        CameraState::Off => "Camera off",
        CameraState::Starting => "Starting camera...",
        CameraState::On if model.panels.webcam_visible => "Live feed",
        CameraState::On => "Live feed hidden",
    };
    Section {
        title: "Webcam".to_string(),
        lines: vec![line.to_string()],
    }
}

fn prediction_section(model: &Model) -> Section {
    let lines = match &model.session {
        SessionState::Inactive { .. } => vec!["Stopped".to_string()],
        SessionState::Loading { .. } => vec!["Loading model...".to_string()],
        SessionState::Active(active) => {
            let mut lines = vec![format!(
                "Running, {} frames sampled",
                active.history.frames_recorded()
            )];
            if active.ticks_failed > 0 || active.ticks_skipped > 0 {
                lines.push(format!(
                    "{} failed, {} skipped ticks",
                    active.ticks_failed, active.ticks_skipped
                ));
            }
            lines
        }
    };
    Section {
        title: "Prediction".to_string(),
        lines,
    }
}

fn labels_section(catalog: &Catalog, model: &Model) -> Section {
    let lines = match &model.session {
        SessionState::Active(active) => {
            let aggregate = average(&active.history);
            catalog
                .items()
                .iter()
                .map(|item| {
                    let latest = active
                        .latest
                        .iter()
                        .find(|sample| sample.label == item.label)
                        .map(|sample| format!("{:.2}%", sample.percentage()))
                        .unwrap_or_else(|| "--".to_string());
                    let mean = aggregate
                        .get(&item.label)
                        .map(|mean| format!("{:.2}%", mean))
                        .unwrap_or_else(|| "--".to_string());
                    format!("{}: {} (avg {})", item.display_name, latest, mean)
                })
                .collect()
        }
        _ => match model.last_summary() {
            Some(summary) if !summary.aggregate.is_empty() => catalog
                .items()
                .iter()
                .filter_map(|item| {
                    summary
                        .aggregate
                        .get(&item.label)
                        .map(|mean| format!("{}: avg {:.2}%", item.display_name, mean))
                })
                .collect(),
            _ => vec!["No predictions yet".to_string()],
        },
    };
    Section {
        title: "Labels".to_string(),
        lines,
    }
}

fn recommendation_section(catalog: &Catalog, summary: &SessionSummary) -> Section {
    let item = summary
        .decision
        .as_deref()
        .and_then(|label| catalog.get(label));

    let lines = match (item, summary.winning_mean()) {
        (Some(item), Some(mean)) => vec![
            format!("Best match: {}", item.display_name),
            format!("Image: {}", item.image_asset),
            format!("Score: {}", item.score),
            format!("Calories: {} kcal", item.calories_kcal),
            format!("Confidence: {:.2}% over {} frames", mean, summary.frames_sampled),
        ],
        _ => vec![
            "No clear winner".to_string(),
            format!("{} frames sampled", summary.frames_sampled),
        ],
    };
    Section {
        title: "Recommendation".to_string(),
        lines,
    }
}
