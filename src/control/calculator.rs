use std::{fmt, num::NonZeroU32};

use crate::services::audio::MAX_LEVEL;

/// Highest volume this tool will set, in percent
pub const MAX_PERCENT: u32 = 150;

/// Requested change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Raise volume by one step
    Raise,
    /// Lower volume by one step
    Lower,
    /// Flip the mute flag
    ToggleMute,
}

/// Granularity of volume changes, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeStep(NonZeroU32);

impl VolumeStep {
    /// Step used when none is given
    pub const DEFAULT: Self = Self(NonZeroU32::MIN.saturating_add(4));

    /// Create a step, `None` for zero
    pub fn new(percent: u32) -> Option<Self> {
        NonZeroU32::new(percent).map(Self)
    }

    /// Step size in percent
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for VolumeStep {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for VolumeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Result of applying an [`Action`] to the current device state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeChange {
    /// Volume after the change, in percent
    pub percent: u32,
    /// Mute flag after the change
    pub muted: bool,
    /// Whether the volume must be written back (false for mute toggles)
    pub write_volume: bool,
}

impl VolumeChange {
    /// Volume after the change as a linear level
    pub fn level(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }
}

/// Slack absorbed before truncating, in percent
///
/// The server stores levels in steps of 1/65536, so a level written as 45%
/// reads back as 44.9997%. Anything within this distance below a whole
/// percent counts as that percent.
const READBACK_TOLERANCE: f64 = 0.01;

/// Linear level to whole percent, truncating
///
/// The result is limited to `0..=MAX_LEVEL * 100`.
pub fn percent_from_level(level: f64) -> u32 {
    (level * 100.0 + READBACK_TOLERANCE)
        .floor()
        .clamp(0.0, MAX_LEVEL * 100.0) as u32
}

/// Round `percent` to the nearest multiple of `step`
///
/// Ties round away from zero (`f64::round`), so 42 with a step of 4 gives 44.
pub fn quantize(percent: u32, step: VolumeStep) -> u32 {
    let step = step.get();
    ((f64::from(percent) / f64::from(step)).round() as u32).saturating_mul(step)
}

/// One step up, capped at [`MAX_PERCENT`]
pub fn raise(percent: u32, step: VolumeStep) -> u32 {
    percent.saturating_add(step.get()).min(MAX_PERCENT)
}

/// One step down, floored at zero and capped at [`MAX_PERCENT`]
///
/// A device already above the cap lands on the cap, the same as [`raise`].
pub fn lower(percent: u32, step: VolumeStep) -> u32 {
    percent.saturating_sub(step.get()).min(MAX_PERCENT)
}

/// Compute the new device state for `action`
///
/// Raising or lowering always unmutes. Toggling mute leaves the volume as it
/// is and marks it as not to be written.
pub fn compute(level: f64, muted: bool, action: Action, step: VolumeStep) -> VolumeChange {
    let current = percent_from_level(level);

    match action {
        Action::Raise => VolumeChange {
            percent: raise(quantize(current, step), step),
            muted: false,
            write_volume: true,
        },
        Action::Lower => VolumeChange {
            percent: lower(quantize(current, step), step),
            muted: false,
            write_volume: true,
        },
        Action::ToggleMute => VolumeChange {
            percent: current,
            muted: !muted,
            write_volume: false,
        },
    }
}
