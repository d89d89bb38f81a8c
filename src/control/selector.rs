use super::ControlError;
use crate::services::DeviceInfo;

/// Pick the output device to act on
///
/// The last device in listing order that is running wins. When nothing is
/// running the first device is used.
///
/// # Errors
/// Returns [`ControlError::NoDevice`] for an empty list
pub fn select_active_device(devices: &[DeviceInfo]) -> Result<&DeviceInfo, ControlError> {
    devices
        .iter()
        .rev()
        .find(|device| device.state.is_running())
        .or_else(|| devices.first())
        .ok_or(ControlError::NoDevice)
}
