use crate::services::AudioError;

/// Errors that end a volume change run
#[derive(thiserror::Error, Debug)]
pub enum ControlError {
    /// The server reported no output devices
    #[error("no audio device")]
    NoDevice,

    /// Audio server request failed
    #[error(transparent)]
    Audio(#[from] AudioError),
}
