use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::control::{Action, DEFAULT_SOUND_FILE, MAX_PERCENT, VolumeRequest, VolumeStep};

/// PulseAudio volume control with audible and visible notification
#[derive(Parser, Debug)]
#[command(name = "bloopvolume", version, about)]
pub struct Args {
    /// What to do with the active output device
    #[arg(value_enum)]
    pub action: ActionArg,

    /// Percentage to change the volume by
    #[arg(
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PERCENT))
    )]
    pub step: u32,

    /// Sound file to play when the notification is shown
    #[arg(long, default_value = DEFAULT_SOUND_FILE)]
    pub sound: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Command line spelling of [`Action`]
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionArg {
    /// Raise the volume one step
    Up,
    /// Lower the volume one step
    Down,
    /// Toggle mute
    Mute,
}

impl From<ActionArg> for Action {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Up => Action::Raise,
            ActionArg::Down => Action::Lower,
            ActionArg::Mute => Action::ToggleMute,
        }
    }
}

impl Args {
    /// Convert parsed arguments into a volume request
    pub fn request(&self) -> VolumeRequest {
        VolumeRequest {
            action: self.action.into(),
            step: VolumeStep::new(self.step).unwrap_or_default(),
            sound: self.sound.clone(),
        }
    }
}
