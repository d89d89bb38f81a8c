use tracing::{instrument, warn};

use super::VolumeChange;
use crate::services::{AudioControl, DeviceInfo, Volume};

/// Write the mute flag, and the volume when the change carries one
///
/// Both writes are attempted even if the first is rejected. Returns `true`
/// when every write was accepted.
#[instrument(skip_all, fields(device = %device.index, percent = change.percent, muted = change.muted))]
pub fn apply<A: AudioControl + ?Sized>(
    audio: &mut A,
    device: &DeviceInfo,
    change: &VolumeChange,
) -> bool {
    let mut applied = true;

    if let Err(e) = audio.set_mute(device.index, change.muted) {
        warn!(error = %e, "Failed to set mute state");
        applied = false;
    }

    if change.write_volume {
        let channels = device.volume.channels().max(1);
        let volume = Volume::from_percentage(change.percent, channels);
        if let Err(e) = audio.set_volume(device.index, &volume) {
            warn!(error = %e, "Failed to set volume");
            applied = false;
        }
    }

    applied
}
