use std::fmt;

use super::Volume;

/// Audio device index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceIndex(pub u32);

impl fmt::Display for DeviceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Audio device name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceName(String);

impl DeviceName {
    /// Create a DeviceName from a string
    pub fn new(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Output device state as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceState {
    /// Device is playing audio
    Running,
    /// Device is open but idle
    Idle,
    /// Device is suspended
    Suspended,
    /// Device state is unknown
    Unknown,
}

impl DeviceState {
    /// Whether the device is currently playing audio
    pub fn is_running(self) -> bool {
        self == DeviceState::Running
    }
}

/// Snapshot of one output device (sink)
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfo {
    /// Device index
    pub index: DeviceIndex,
    /// Device name
    pub name: DeviceName,
    /// Human-readable description
    pub description: String,
    /// Device state
    pub state: DeviceState,
    /// Whether device is muted
    pub muted: bool,
    /// Device volume
    pub volume: Volume,
}

impl DeviceInfo {
    /// Create a new device info
    pub fn new(
        index: u32,
        name: DeviceName,
        description: String,
        state: DeviceState,
        muted: bool,
        volume: Volume,
    ) -> Self {
        Self {
            index: DeviceIndex(index),
            name,
            description,
            state,
            muted,
            volume,
        }
    }
}
