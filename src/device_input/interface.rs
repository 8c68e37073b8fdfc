use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleWebcam,
    ToggleDisplay,
    ToggleLabels,
    ToggleInfo,
    ToggleSession,
    CloseNotice,
    Feedback { liked: bool },
    Quit,
}

pub trait DeviceInput {
    /// Commands in the order the user issued them. The channel closes when the
    /// input source is exhausted.
    fn events(&self) -> Receiver<Command>;
}
