use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub positive: bool,
}

/// Everything the presentation surface shows at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    pub header: String,
    pub theme: Theme,
    pub sections: Vec<Section>,
    /// Blocking notice; stays until the user closes it.
    pub notice: Option<String>,
    pub alert: Option<Alert>,
}

impl Screen {
    #[allow(dead_code)]
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }
}

pub trait DeviceDisplay: Send + Sync {
    /// Replace whatever is shown with `screen`.
    fn draw(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>>;
}
