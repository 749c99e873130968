//! Sine oscillator that renders exactly one tone

use std::time::Duration;

use dasp_graph::Buffer;

/// Length of the fade in and out at either end of a tone.
const RAMP: Duration = Duration::from_millis(5);

/// A finite sine tone, rendered one block at a time.
///
/// The first and last few milliseconds are ramped so back-to-back tones
/// don't click.
pub struct Sine {
    frequency: f32,
    phase: f32,
    amplitude: f32,
    sample_rate: u32,
    position: usize,
    total: usize,
    ramp: usize,
}

impl Sine {
    pub fn new(frequency: f32, sample_rate: u32, duration: Duration) -> Self {
        let total = (sample_rate as f64 * duration.as_secs_f64()).round() as usize;
        let ramp = ((sample_rate as f64 * RAMP.as_secs_f64()) as usize).min(total / 2);

        Self {
            frequency: frequency.max(0.0),
            phase: 0.0,
            amplitude: 0.25, // -12dB, safe default
            sample_rate,
            position: 0,
            total,
            ramp,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude.clamp(0.0, 1.0);
        self
    }

    #[inline]
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    #[inline]
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Samples per channel the whole tone lasts.
    #[inline]
    pub fn len(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.total - self.position
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.position >= self.total
    }

    #[inline]
    fn envelope(&self, n: usize) -> f32 {
        if self.ramp == 0 {
            return 1.0;
        }
        let rise = n as f32 / self.ramp as f32;
        let fall = (self.total - n) as f32 / self.ramp as f32;
        rise.min(fall).min(1.0)
    }

    /// Render the next block into `output`.
    ///
    /// Returns how many samples belong to the tone; the rest of the block is
    /// silence.
    pub fn process(&mut self, output: &mut Buffer) -> usize {
        let count = output.len().min(self.remaining());
        let phase_inc = self.frequency / self.sample_rate as f32;

        for (i, sample) in output.iter_mut().enumerate() {
            if i >= count {
                *sample = 0.0;
                continue;
            }

            let gain = self.envelope(self.position) * self.amplitude;
            *sample = (self.phase * core::f32::consts::TAU).sin() * gain;

            self.phase += phase_inc;
            // Branchless phase wrap (phase is always positive)
            self.phase -= (self.phase >= 1.0) as u32 as f32;
            self.position += 1;
        }

        count
    }
}
