use std::{io::ErrorKind, process::Command};

use tracing::{debug, warn};

/// Runs an external program to completion
///
/// The only place this crate spawns processes. Tests substitute a recording
/// double so no real program is started.
pub trait CommandRunner {
    /// Run `command` (program followed by its arguments)
    ///
    /// Returns `true` only when the program exited with status zero. A
    /// missing program or a non-zero exit is `false`, never an error.
    fn run(&self, command: &[String]) -> bool;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &[String]) -> bool {
        (**self).run(command)
    }
}

/// [`CommandRunner`] backed by [`std::process::Command`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &[String]) -> bool {
        let Some((program, args)) = command.split_first() else {
            warn!("Refusing to run an empty command");
            return false;
        };

        debug!(program, ?args, "Running external command");
        match Command::new(program).args(args).status() {
            Ok(status) if status.success() => true,
            Ok(status) => {
                debug!(program, %status, "External command failed");
                false
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(program, "External command not installed");
                false
            }
            Err(e) => {
                warn!(program, error = %e, "Failed to start external command");
                false
            }
        }
    }
}
