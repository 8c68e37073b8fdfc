use thiserror::Error;

/// Reasons a user action could not go ahead; the message is shown as a notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Enable camera to start model prediction")]
    CameraInactive,
    #[error("Please enable the webcam first")]
    DisplayInactive,
    #[error("Could not access the webcam - check your permissions")]
    CameraAccess(String),
    #[error("Could not load the prediction model")]
    ModelLoad(String),
}

impl SessionError {
    /// Underlying device error, if the failure came from one.
    pub fn cause(&self) -> Option<&str> {
        match self {
            SessionError::CameraAccess(cause) | SessionError::ModelLoad(cause) => Some(cause),
            _ => None,
        }
    }
}
