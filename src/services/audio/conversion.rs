use std::borrow::Cow;

use libpulse_binding::{
    context::introspect::SinkInfo,
    def::SinkState,
    volume::{ChannelVolumes, Volume as PulseVolume},
};

use super::{DeviceInfo, DeviceName, DeviceState, Volume};

/// Convert our volume to PulseAudio volume
///
/// Every channel is set to the average level, so a balanced result is
/// written even when the source channels differ.
/// - 0.0 → PA_VOLUME_MUTED (0)
/// - 1.0 → PA_VOLUME_NORM (65536)
pub fn convert_volume_to_pulse(volume: &Volume) -> ChannelVolumes {
    let channels = volume.channels();
    if channels == 0 {
        return ChannelVolumes::default();
    }

    let pulse_vol = PulseVolume((volume.average() * f64::from(PulseVolume::NORMAL.0)).round() as u32);

    let mut pulse_volume = ChannelVolumes::default();
    pulse_volume.set(channels as u8, pulse_vol);

    pulse_volume
}

/// Convert PulseAudio volume to our volume
pub fn convert_volume_from_pulse(pulse_volume: &ChannelVolumes) -> Volume {
    let volumes: Vec<f64> = pulse_volume
        .get()
        .iter()
        .map(|v| f64::from(v.0) / f64::from(PulseVolume::NORMAL.0))
        .collect();

    Volume::new(volumes)
}

/// Convert PulseAudio sink state to our state
pub fn convert_sink_state(state: SinkState) -> DeviceState {
    match state {
        SinkState::Running => DeviceState::Running,
        SinkState::Idle => DeviceState::Idle,
        SinkState::Suspended => DeviceState::Suspended,
        _ => DeviceState::Unknown,
    }
}

fn cow_str_to_string(cow_str: Option<&Cow<str>>) -> String {
    cow_str.map(|s| s.to_string()).unwrap_or_default()
}

/// Create device info from PulseAudio sink information
pub fn create_device_info_from_sink(sink_info: &SinkInfo) -> DeviceInfo {
    DeviceInfo::new(
        sink_info.index,
        DeviceName::new(cow_str_to_string(sink_info.name.as_ref())),
        cow_str_to_string(sink_info.description.as_ref()),
        convert_sink_state(sink_info.state),
        sink_info.mute,
        convert_volume_from_pulse(&sink_info.volume),
    )
}
