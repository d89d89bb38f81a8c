//! Unit tests for CLI module
//!
//! Parses argument vectors only. Nothing touches the audio server.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;

use clap::{Parser, error::ErrorKind};

use crate::cli::{ActionArg, Args};
use crate::control::{Action, DEFAULT_SOUND_FILE};

#[test]
fn defaults() {
    let args = Args::try_parse_from(["bloopvolume", "up"]).unwrap();

    assert_eq!(args.action, ActionArg::Up);
    assert_eq!(args.step, 5);
    assert_eq!(args.sound, PathBuf::from(DEFAULT_SOUND_FILE));
    assert_eq!(args.verbose, 0);
}

#[test]
fn actions_map_to_domain() {
    for (word, action) in [
        ("up", Action::Raise),
        ("down", Action::Lower),
        ("mute", Action::ToggleMute),
    ] {
        let args = Args::try_parse_from(["bloopvolume", word]).unwrap();
        assert_eq!(args.request().action, action);
    }
}

#[test]
fn overrides() {
    let args = Args::try_parse_from([
        "bloopvolume",
        "down",
        "--step",
        "10",
        "--sound",
        "/tmp/click.wav",
        "-vv",
    ])
    .unwrap();

    let request = args.request();
    assert_eq!(request.step.get(), 10);
    assert_eq!(request.sound, PathBuf::from("/tmp/click.wav"));
    assert_eq!(args.verbose, 2);
}

#[test]
fn rejects_unknown_action() {
    let err = Args::try_parse_from(["bloopvolume", "louder"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn rejects_missing_action() {
    let err = Args::try_parse_from(["bloopvolume"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn rejects_bad_steps() {
    for step in ["0", "-5", "abc", "151"] {
        assert!(
            Args::try_parse_from(["bloopvolume", "up", "--step", step]).is_err(),
            "step {step} should be rejected"
        );
    }
}
