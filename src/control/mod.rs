//! Volume change pipeline.
//!
//! One run selects the active output device, computes the new state, writes
//! it back and then emits audible and visible feedback. Steps run strictly
//! in that order.

mod applier;
mod calculator;
mod error;
mod feedback;
mod selector;

use std::path::PathBuf;

use tracing::{info, instrument};

pub use applier::apply;
pub use calculator::{
    Action, MAX_PERCENT, VolumeChange, VolumeStep, compute, lower, percent_from_level, quantize,
    raise,
};
pub use error::ControlError;
pub use feedback::{SAMPLE_NAME, notify, play_sound};
pub use selector::select_active_device;

use crate::services::{AudioControl, DeviceIndex, Notifier, SampleControl};

/// Sound played when no other file is given
pub const DEFAULT_SOUND_FILE: &str = "/usr/share/sounds/freedesktop/stereo/audio-volume-change.oga";

/// Everything one invocation needs to know
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeRequest {
    /// Requested change
    pub action: Action,
    /// Step size for raise and lower
    pub step: VolumeStep,
    /// Sound file for the audible confirmation
    pub sound: PathBuf,
}

impl VolumeRequest {
    /// Request with the default step and sound file
    pub fn new(action: Action) -> Self {
        Self {
            action,
            step: VolumeStep::default(),
            sound: PathBuf::from(DEFAULT_SOUND_FILE),
        }
    }
}

/// What a run did
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Device that was changed
    pub device: DeviceIndex,
    /// Volume after the run, in percent
    pub percent: u32,
    /// Mute flag after the run
    pub muted: bool,
    /// Whether the audio server accepted every write
    pub applied: bool,
    /// Whether the confirmation sound played
    pub sound_played: bool,
    /// Whether the notification was shown
    pub notified: bool,
}

/// Run one volume change against the given collaborators
///
/// Feedback is emitted even when a write was rejected; check
/// [`Outcome::applied`] for the result of the change itself.
///
/// # Errors
/// Returns error if the device list cannot be read or is empty
#[instrument(skip(audio, samples, notifier))]
pub fn run<A, S, N>(
    audio: &mut A,
    samples: &S,
    notifier: &N,
    request: &VolumeRequest,
) -> Result<Outcome, ControlError>
where
    A: AudioControl + ?Sized,
    S: SampleControl + ?Sized,
    N: Notifier + ?Sized,
{
    let devices = audio.output_devices()?;
    let device = select_active_device(&devices)?;
    info!(
        index = %device.index,
        name = %device.name,
        description = %device.description,
        state = ?device.state,
        "Selected output device"
    );

    let current_level = device.volume.average();
    let change = compute(current_level, device.muted, request.action, request.step);
    let applied = apply(audio, device, &change);

    let level = if change.write_volume {
        change.level()
    } else {
        current_level
    };
    let sound_played = play_sound(samples, &request.sound, device.index);
    let notified = notify(notifier, level, change.muted);

    info!(
        percent = change.percent,
        muted = change.muted,
        applied,
        "Volume change complete"
    );

    Ok(Outcome {
        device: device.index,
        percent: change.percent,
        muted: change.muted,
        applied,
        sound_played,
        notified,
    })
}
