//! Bloopvolume - PulseAudio volume control with feedback.
//!
//! Raises, lowers or mutes the active output device, then plays a short
//! confirmation sound and shows a desktop notification with the new level.
//!
//! ```rust,no_run
//! use bloopvolume::{
//!     control::{self, Action, VolumeRequest},
//!     services::{Dunstify, Pactl, ProcessRunner, PulseSession},
//! };
//!
//! let mut session = PulseSession::connect("bloopvolume")?;
//! let outcome = control::run(
//!     &mut session,
//!     &Pactl::new(ProcessRunner),
//!     &Dunstify::new(ProcessRunner),
//!     &VolumeRequest::new(Action::Raise),
//! )?;
//! println!("volume now {}%", outcome.percent);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Command-line argument parsing.
pub mod cli;

/// Device selection, volume arithmetic and the change pipeline.
pub mod control;

/// Audio server and external command collaborators.
pub mod services;

/// Logging setup.
pub mod tracing_config;
