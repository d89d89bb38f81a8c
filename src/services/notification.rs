use std::fmt;

use super::CommandRunner;

/// Replace id shared by every notification this tool sends, so a new one
/// updates the previous popup instead of stacking below it.
pub const NOTIFICATION_ID: u32 = 6788;

/// Notification priority hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    /// Normal priority
    #[default]
    Normal,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Normal => write!(f, "normal"),
        }
    }
}

/// Glyph shown in front of the notification label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeGlyph {
    /// 🔇
    Muted,
    /// 🔈 below 30%
    Low,
    /// 🔉 below 60%
    Medium,
    /// 🔊 60% and above
    High,
}

impl VolumeGlyph {
    /// Pick the glyph for a linear volume level and mute flag
    pub fn select(volume: f64, muted: bool) -> Self {
        if muted {
            VolumeGlyph::Muted
        } else if volume < 0.3 {
            VolumeGlyph::Low
        } else if volume < 0.6 {
            VolumeGlyph::Medium
        } else {
            VolumeGlyph::High
        }
    }

    /// The emoji itself
    pub fn as_str(self) -> &'static str {
        match self {
            VolumeGlyph::Muted => "\u{1F507}",
            VolumeGlyph::Low => "\u{1F508}",
            VolumeGlyph::Medium => "\u{1F509}",
            VolumeGlyph::High => "\u{1F50A}",
        }
    }
}

/// A single on-screen notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Id used to replace an earlier notification
    pub replace_id: u32,
    /// Priority hint
    pub urgency: Urgency,
    /// Text shown in the popup
    pub label: String,
    /// Progress bar value, 0 to 100 (may exceed 100 when amplified)
    pub progress: u32,
}

impl NotificationRequest {
    /// Build the volume notification for a linear level and mute flag
    ///
    /// A muted device shows an empty bar so the popup keeps its size.
    pub fn volume(volume: f64, muted: bool) -> Self {
        let glyph = VolumeGlyph::select(volume, muted).as_str();
        let (label, progress) = if muted {
            (format!("{glyph} Volume: Mute"), 0)
        } else {
            (
                format!("{glyph} Volume: "),
                (volume * 100.0).round().max(0.0) as u32,
            )
        };

        Self {
            replace_id: NOTIFICATION_ID,
            urgency: Urgency::Normal,
            label,
            progress,
        }
    }
}

/// Desktop notification display
pub trait Notifier {
    /// Show (or replace) a notification
    fn show(&self, request: &NotificationRequest) -> bool;
}

/// [`Notifier`] through the `dunstify` command line tool
#[derive(Debug, Clone)]
pub struct Dunstify<R> {
    runner: R,
}

impl<R: CommandRunner> Dunstify<R> {
    /// Create a notifier using `runner` to invoke `dunstify`
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Arguments passed to `dunstify` for `request`
    pub fn command(request: &NotificationRequest) -> Vec<String> {
        vec![
            "dunstify".to_string(),
            "-r".to_string(),
            request.replace_id.to_string(),
            "-u".to_string(),
            request.urgency.to_string(),
            request.label.clone(),
            "-h".to_string(),
            format!("int:value:{}", request.progress),
        ]
    }
}

impl<R: CommandRunner> Notifier for Dunstify<R> {
    fn show(&self, request: &NotificationRequest) -> bool {
        self.runner.run(&Self::command(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_thresholds() {
        assert_eq!(VolumeGlyph::select(0.29, false), VolumeGlyph::Low);
        assert_eq!(VolumeGlyph::select(0.30, false), VolumeGlyph::Medium);
        assert_eq!(VolumeGlyph::select(0.59, false), VolumeGlyph::Medium);
        assert_eq!(VolumeGlyph::select(0.60, false), VolumeGlyph::High);
        assert_eq!(VolumeGlyph::select(1.5, false), VolumeGlyph::High);
    }

    #[test]
    fn mute_glyph_ignores_volume() {
        for volume in [0.0, 0.29, 0.45, 1.0] {
            assert_eq!(VolumeGlyph::select(volume, true), VolumeGlyph::Muted);
        }
    }

    #[test]
    fn muted_notification_flattens_bar() {
        let request = NotificationRequest::volume(0.8, true);
        assert_eq!(request.label, "\u{1F507} Volume: Mute");
        assert_eq!(request.progress, 0);
        assert_eq!(request.urgency, Urgency::Normal);
        assert_eq!(request.replace_id, NOTIFICATION_ID);
    }

    #[test]
    fn unmuted_notification_rounds_progress() {
        let request = NotificationRequest::volume(0.446, false);
        assert_eq!(request.label, "\u{1F509} Volume: ");
        assert_eq!(request.progress, 45);
    }

    #[test]
    fn dunstify_arguments() {
        let request = NotificationRequest::volume(0.45, false);
        assert_eq!(
            Dunstify::<crate::services::ProcessRunner>::command(&request),
            [
                "dunstify",
                "-r",
                "6788",
                "-u",
                "normal",
                "\u{1F509} Volume: ",
                "-h",
                "int:value:45",
            ]
        );
    }
}
