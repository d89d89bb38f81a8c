/// Highest level the server accepts (400%)
pub const MAX_LEVEL: f64 = 4.0;

/// Multi-channel volume
///
/// Levels are linear where 1.0 is 100%. Values are clamped into
/// `0.0..=MAX_LEVEL` on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    volumes: Vec<f64>,
}

impl Volume {
    /// Create a new volume with the given channel volumes
    pub fn new(volumes: Vec<f64>) -> Self {
        let volumes = volumes
            .into_iter()
            .map(|v| {
                if !(0.0..=MAX_LEVEL).contains(&v) {
                    tracing::warn!("Volume {v} out of range, clamping to 0.0-{MAX_LEVEL}");
                }
                v.clamp(0.0, MAX_LEVEL)
            })
            .collect();
        Self { volumes }
    }

    /// Create a stereo volume
    pub fn stereo(left: f64, right: f64) -> Self {
        Self::new(vec![left, right])
    }

    /// Create a volume from percentage (100% maps to 1.0) on every channel
    pub fn from_percentage(percentage: u32, channels: usize) -> Self {
        Self::new(vec![f64::from(percentage) / 100.0; channels])
    }

    /// Get average volume across all channels
    pub fn average(&self) -> f64 {
        if self.volumes.is_empty() {
            0.0
        } else {
            self.volumes.iter().sum::<f64>() / self.volumes.len() as f64
        }
    }

    /// Get number of channels
    pub fn channels(&self) -> usize {
        self.volumes.len()
    }

    /// Get all channel volumes
    pub fn as_slice(&self) -> &[f64] {
        &self.volumes
    }
}
