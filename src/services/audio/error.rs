/// Errors that can occur during audio operations
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    /// PulseAudio connection error
    #[error("PulseAudio connection failed: {0}")]
    ConnectionFailed(String),

    /// PulseAudio operation failed
    #[error("PulseAudio operation failed: {0}")]
    OperationFailed(String),
}
