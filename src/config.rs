//! Tunables for pitch range, tone length and loudness.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::pitch::{BASE_FREQUENCY, DEFAULT_DURATION, MAXIMUM_FREQUENCY};

/// Sonification settings.
///
/// Built with [`Config::default`] and adjusted with the `with_*` methods:
///
/// ```
/// use std::time::Duration;
/// use musicalsort::Config;
///
/// let config = Config::default()
///     .with_range(300.0, 1200.0)
///     .with_duration(Duration::from_millis(20));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Reference pitch for equal-tempered playback (interval 0).
    pub base_frequency: f32,
    /// Lowest pitch of the scaled range.
    pub min_frequency: f32,
    /// Highest pitch of the scaled range.
    pub max_frequency: f32,
    /// How long each tone lasts.
    pub duration: Duration,
    /// Peak output level, 0.0 - 1.0.
    pub amplitude: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_frequency: BASE_FREQUENCY,
            min_frequency: BASE_FREQUENCY,
            max_frequency: MAXIMUM_FREQUENCY,
            duration: DEFAULT_DURATION,
            amplitude: 0.25, // -12dB
        }
    }
}

impl Config {
    pub fn with_base_frequency(mut self, base_frequency: f32) -> Self {
        self.base_frequency = base_frequency;
        self
    }

    pub fn with_range(mut self, min_frequency: f32, max_frequency: f32) -> Self {
        self.min_frequency = min_frequency;
        self.max_frequency = max_frequency;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Check that every field describes something playable.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.base_frequency,
            self.min_frequency,
            self.max_frequency,
            self.amplitude,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(Error::InvalidConfig("values must be finite".into()));
        }
        if self.base_frequency <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "base frequency must be positive, got {}",
                self.base_frequency
            )));
        }
        if self.min_frequency <= 0.0 || self.min_frequency >= self.max_frequency {
            return Err(Error::InvalidConfig(format!(
                "frequency range must satisfy 0 < min < max, got {}..{}",
                self.min_frequency, self.max_frequency
            )));
        }
        if self.duration.is_zero() {
            return Err(Error::InvalidConfig("tone duration must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.amplitude) {
            return Err(Error::InvalidConfig(format!(
                "amplitude must be within 0.0..=1.0, got {}",
                self.amplitude
            )));
        }
        Ok(())
    }
}
