/// Audio server control
pub mod audio;
/// External command execution
pub mod command;
/// Desktop notifications
pub mod notification;
/// Sound sample upload and playback
pub mod sound;

pub use audio::{
    AudioControl, AudioError, DeviceIndex, DeviceInfo, DeviceName, DeviceState, PulseSession,
    Volume,
};
pub use command::{CommandRunner, ProcessRunner};
pub use notification::{Dunstify, NotificationRequest, Notifier, Urgency, VolumeGlyph};
pub use sound::{Pactl, SampleControl};
