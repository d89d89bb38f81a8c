//! Bloopvolume - change the active output volume with audible and visible
//! notification.

use std::process::ExitCode;

use bloopvolume::{
    cli::Args,
    control::{self, Outcome},
    services::{Dunstify, Pactl, ProcessRunner, PulseSession},
    tracing_config,
};
use clap::Parser;
use tracing::error;

const CLIENT_NAME: &str = "bloopvolume";

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = tracing_config::init_cli_mode(args.verbose) {
        eprintln!("bloopvolume: failed to initialize logging: {e}");
    }

    match run(&args) {
        Ok(outcome) if outcome.applied => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            eprintln!("bloopvolume: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Connects to the audio server for the duration of one change.
///
/// The session is dropped (and disconnected) before this returns, on
/// success and on every error path.
fn run(args: &Args) -> Result<Outcome, Box<dyn std::error::Error>> {
    let mut session = PulseSession::connect(CLIENT_NAME)?;
    let samples = Pactl::new(ProcessRunner);
    let notifier = Dunstify::new(ProcessRunner);

    let outcome = control::run(&mut session, &samples, &notifier, &args.request())?;
    Ok(outcome)
}
