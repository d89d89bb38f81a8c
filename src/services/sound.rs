use std::path::Path;

use super::{CommandRunner, audio::DeviceIndex};

/// Sample cache control on the audio server
pub trait SampleControl {
    /// Upload the sound file at `path` under `name`
    fn upload(&self, path: &Path, name: &str) -> bool;

    /// Play the cached sample `name` on `device`
    fn play(&self, name: &str, device: DeviceIndex) -> bool;
}

/// [`SampleControl`] through the `pactl` command line tool
#[derive(Debug, Clone)]
pub struct Pactl<R> {
    runner: R,
}

impl<R: CommandRunner> Pactl<R> {
    /// Create a sample controller using `runner` to invoke `pactl`
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> SampleControl for Pactl<R> {
    fn upload(&self, path: &Path, name: &str) -> bool {
        self.runner.run(&[
            "pactl".to_string(),
            "upload-sample".to_string(),
            path.display().to_string(),
            name.to_string(),
        ])
    }

    fn play(&self, name: &str, device: DeviceIndex) -> bool {
        self.runner.run(&[
            "pactl".to_string(),
            "play-sample".to_string(),
            name.to_string(),
            device.to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct Recorder {
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl CommandRunner for Recorder {
        fn run(&self, command: &[String]) -> bool {
            self.calls.borrow_mut().push(command.to_vec());
            true
        }
    }

    #[test]
    fn pactl_arguments() {
        let recorder = Recorder {
            calls: RefCell::new(Vec::new()),
        };
        let pactl = Pactl::new(&recorder);

        assert!(pactl.upload(Path::new("/tmp/bloop.oga"), "volume-change"));
        assert!(pactl.play("volume-change", DeviceIndex(3)));

        let calls = recorder.calls.borrow();
        assert_eq!(
            calls[0],
            ["pactl", "upload-sample", "/tmp/bloop.oga", "volume-change"]
        );
        assert_eq!(calls[1], ["pactl", "play-sample", "volume-change", "3"]);
    }
}
