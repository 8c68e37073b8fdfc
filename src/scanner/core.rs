use crate::config::Config;
use crate::device_camera::interface::Frame;
use crate::device_input::interface::Command;
use crate::error::SessionError;
use crate::image_classifier::interface::Classification;
use crate::prediction::{Sample, SessionHistory, SessionSummary};
use std::time::Instant;

pub type SessionId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CameraState {
    #[default]
    Off,
    Starting,
    On,
}

/// Where the current tick is. Only `Idle` may start a new capture, which keeps
/// ticks from overlapping while the classifier is slow.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SamplerState {
    #[default]
    Idle,
    Capturing,
    Classifying,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSession {
    pub id: SessionId,
    pub history: SessionHistory,
    pub latest: Vec<Sample>,
    pub sampler: SamplerState,
    pub ticks_failed: usize,
    pub ticks_skipped: usize,
}

impl ActiveSession {
    pub fn new(config: &Config, id: SessionId) -> Self {
        Self {
            id,
            history: SessionHistory::new(&config.catalog),
            latest: Vec::new(),
            sampler: SamplerState::Idle,
            ticks_failed: 0,
            ticks_skipped: 0,
        }
    }

    pub fn finish(&self) -> SessionSummary {
        SessionSummary {
            ticks_failed: self.ticks_failed,
            ticks_skipped: self.ticks_skipped,
            ..SessionSummary::from_history(&self.history)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Inactive {
        last_summary: Option<SessionSummary>,
    },
    Loading {
        id: SessionId,
    },
    Active(ActiveSession),
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Inactive { last_summary: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panels {
    pub webcam_visible: bool,
    pub labels_visible: bool,
    pub info_visible: bool,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            webcam_visible: false,
            labels_visible: true,
            info_visible: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub liked: bool,
    pub shown_at: Instant,
}

impl Feedback {
    pub fn message(&self) -> &'static str {
        if self.liked {
            "You liked the AI's Recommendation!"
        } else {
            "You disliked the AI's Recommendation!"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Model {
    pub camera: CameraState,
    pub session: SessionState,
    pub next_session_id: SessionId,
    pub panels: Panels,
    pub notice: Option<SessionError>,
    pub feedback: Option<Feedback>,
    pub exiting: bool,
}

impl Model {
    pub fn last_summary(&self) -> Option<&SessionSummary> {
        match &self.session {
            SessionState::Inactive { last_summary } => last_summary.as_ref(),
            _ => None,
        }
    }
}

type DeviceResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug)]
pub enum Event {
    Tick(Instant),
    /// A user command and when it was issued.
    Command(Command, Instant),
    CameraStartDone(DeviceResult<()>),
    CameraStopDone(#[allow(dead_code)] DeviceResult<()>),
    ClassifierLoadDone {
        session: SessionId,
        result: DeviceResult<usize>,
    },
    FrameCaptureDone {
        session: SessionId,
        result: DeviceResult<Frame>,
    },
    FrameClassifyDone {
        session: SessionId,
        result: DeviceResult<Vec<Classification>>,
    },
}

impl Event {
    /// Per-tick events, too frequent to be worth logging.
    pub fn is_noisy(&self) -> bool {
        matches!(
            self,
            Event::Tick(_) | Event::FrameCaptureDone { .. } | Event::FrameClassifyDone { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    SubscribeInput,
    SubscribeTick,
    StartCamera,
    StopCamera,
    LoadClassifier { session: SessionId },
    CaptureFrame { session: SessionId },
    ClassifyFrame { session: SessionId, frame: Frame },
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model::default(),
        vec![Effect::SubscribeInput, Effect::SubscribeTick],
    )
}

pub fn transition(config: &Config, model: Model, event: Event) -> (Model, Vec<Effect>) {
    match event {
        Event::Command(command, at) => on_command(model, command, at),
        Event::Tick(now) => on_tick(config, model, now),

        Event::CameraStartDone(result) => {
            let mut model = model;
            if model.camera != CameraState::Starting {
                return (model, vec![]);
            }
            match result {
                Ok(()) => {
                    model.camera = CameraState::On;
                    model.panels.webcam_visible = true;
                }
                Err(e) => {
                    model.camera = CameraState::Off;
                    model.notice = Some(SessionError::CameraAccess(e.to_string()));
                }
            }
            (model, vec![])
        }
        Event::CameraStopDone(_) => (model, vec![]),

        Event::ClassifierLoadDone { session, result } => {
            let mut model = model;
            let SessionState::Loading { id } = &model.session else {
                return (model, vec![]);
            };
            let id = *id;
            if id != session {
                return (model, vec![]);
            }
            match result {
                Ok(_) => {
                    model.session = SessionState::Active(ActiveSession::new(config, id));
                }
                Err(e) => {
                    model.session = SessionState::Inactive { last_summary: None };
                    model.notice = Some(SessionError::ModelLoad(e.to_string()));
                }
            }
            (model, vec![])
        }

        Event::FrameCaptureDone { session, result } => {
            let mut model = model;
            let SessionState::Active(active) = &mut model.session else {
                return (model, vec![]);
            };
            if active.id != session || active.sampler != SamplerState::Capturing {
                return (model, vec![]);
            }
            match result {
                Ok(frame) => {
                    active.sampler = SamplerState::Classifying;
                    (model, vec![Effect::ClassifyFrame { session, frame }])
                }
                Err(_) => {
                    active.sampler = SamplerState::Idle;
                    active.ticks_failed += 1;
                    (model, vec![])
                }
            }
        }

        Event::FrameClassifyDone { session, result } => {
            let mut model = model;
            let SessionState::Active(active) = &mut model.session else {
                return (model, vec![]);
            };
            if active.id != session || active.sampler != SamplerState::Classifying {
                return (model, vec![]);
            }
            active.sampler = SamplerState::Idle;
            match result {
                Ok(classifications) => {
                    let samples: Vec<Sample> = classifications
                        .iter()
                        .map(|c| Sample::new(&c.label, c.probability))
                        .collect();
                    for sample in &samples {
                        active.history.record(sample);
                    }
                    active.latest = samples;
                }
                Err(_) => {
                    active.ticks_failed += 1;
                }
            }
            (model, vec![])
        }
    }
}

fn on_tick(config: &Config, mut model: Model, now: Instant) -> (Model, Vec<Effect>) {
    let alert_expired = model.feedback.as_ref().is_some_and(|feedback| {
        now.saturating_duration_since(feedback.shown_at) >= config.feedback_alert_duration
    });
    if alert_expired {
        model.feedback = None;
    }

    let SessionState::Active(active) = &mut model.session else {
        return (model, vec![]);
    };

    if active.sampler != SamplerState::Idle {
        active.ticks_skipped += 1;
        return (model, vec![]);
    }

    active.sampler = SamplerState::Capturing;
    let session = active.id;
    (model, vec![Effect::CaptureFrame { session }])
}

fn on_command(mut model: Model, command: Command, at: Instant) -> (Model, Vec<Effect>) {
    match command {
        Command::ToggleWebcam => match model.camera {
            CameraState::Off => {
                model.camera = CameraState::Starting;
                (model, vec![Effect::StartCamera])
            }
            CameraState::Starting => (model, vec![]),
            CameraState::On => {
                model.camera = CameraState::Off;
                model.panels.webcam_visible = false;
                model.session = stop_session(model.session);
                (model, vec![Effect::StopCamera])
            }
        },

        Command::ToggleDisplay => {
            if model.camera == CameraState::On {
                model.panels.webcam_visible = !model.panels.webcam_visible;
            } else {
                model.notice = Some(SessionError::DisplayInactive);
            }
            (model, vec![])
        }

        Command::ToggleLabels => {
            model.panels.labels_visible = !model.panels.labels_visible;
            (model, vec![])
        }

        Command::ToggleInfo => {
            model.panels.info_visible = !model.panels.info_visible;
            (model, vec![])
        }

        Command::ToggleSession => match model.session {
            SessionState::Inactive { .. } => {
                if model.camera != CameraState::On {
                    model.notice = Some(SessionError::CameraInactive);
                    return (model, vec![]);
                }
                let id = model.next_session_id;
                model.next_session_id += 1;
                model.session = SessionState::Loading { id };
                (model, vec![Effect::LoadClassifier { session: id }])
            }
            SessionState::Loading { .. } => {
                model.session = SessionState::Inactive { last_summary: None };
                (model, vec![])
            }
            SessionState::Active(_) => {
                model.session = stop_session(model.session);
                (model, vec![])
            }
        },

        Command::CloseNotice => {
            model.notice = None;
            (model, vec![])
        }

        Command::Feedback { liked } => {
            model.feedback = Some(Feedback {
                liked,
                shown_at: at,
            });
            (model, vec![])
        }

        Command::Quit => {
            model.exiting = true;
            let effects = if model.camera != CameraState::Off {
                vec![Effect::StopCamera]
            } else {
                vec![]
            };
            (model, effects)
        }
    }
}

fn stop_session(session: SessionState) -> SessionState {
    match session {
        SessionState::Active(active) => SessionState::Inactive {
            last_summary: Some(active.finish()),
        },
        SessionState::Loading { .. } => SessionState::Inactive { last_summary: None },
        inactive => inactive,
    }
}
