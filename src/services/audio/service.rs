use super::{AudioError, DeviceIndex, DeviceInfo, Volume};

/// Audio server control interface
///
/// Calls block until the server has answered. Implemented by
/// [`PulseSession`](super::PulseSession) and by in-memory doubles in tests.
pub trait AudioControl {
    /// All output devices in the order the server lists them
    ///
    /// # Errors
    /// Returns error if the device query fails
    fn output_devices(&mut self) -> Result<Vec<DeviceInfo>, AudioError>;

    /// Set the mute flag of an output device
    ///
    /// # Errors
    /// Returns error if the server rejects the update
    fn set_mute(&mut self, device: DeviceIndex, muted: bool) -> Result<(), AudioError>;

    /// Set the volume of an output device
    ///
    /// # Errors
    /// Returns error if the server rejects the update
    fn set_volume(&mut self, device: DeviceIndex, volume: &Volume) -> Result<(), AudioError>;
}
