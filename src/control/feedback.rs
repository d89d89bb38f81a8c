use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::services::{DeviceIndex, NotificationRequest, Notifier, SampleControl};

/// Name the confirmation sound is cached under on the server
pub const SAMPLE_NAME: &str = "volume-change";

/// Upload the sound file and play it on `device`
///
/// Playback is skipped when the upload fails.
#[instrument(skip(samples))]
pub fn play_sound<S: SampleControl + ?Sized>(
    samples: &S,
    path: &Path,
    device: DeviceIndex,
) -> bool {
    if !samples.upload(path, SAMPLE_NAME) {
        warn!("Failed to upload sound sample");
        return false;
    }

    let played = samples.play(SAMPLE_NAME, device);
    if !played {
        warn!("Failed to play sound sample");
    }
    played
}

/// Show the volume notification for `level` and `muted`
#[instrument(skip(notifier))]
pub fn notify<N: Notifier + ?Sized>(notifier: &N, level: f64, muted: bool) -> bool {
    let request = NotificationRequest::volume(level, muted);
    debug!(label = %request.label, progress = request.progress, "Sending notification");

    let shown = notifier.show(&request);
    if !shown {
        warn!("Failed to show notification");
    }
    shown
}
