//! Interval to frequency mapping.
//!
//! Two independent policies:
//! - [`equal_temperament`]: semitone steps away from a base frequency
//! - [`scaled`]: spread `0..length` linearly across a fixed frequency range
//!
//! Nothing in here makes a sound; see [`crate::tone`] for that.

use std::time::Duration;

/// Length of a tone when nothing else is configured.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(50);

/// Interval 0 for equal-tempered playback, and the bottom of the scaled range.
pub const BASE_FREQUENCY: f32 = 200.0;

/// Top of the scaled range.
pub const MAXIMUM_FREQUENCY: f32 = 2000.0;

/// `base * 2^(interval / 12)`
#[inline]
pub fn equal_temperament(base: f32, interval: f64) -> f32 {
    (base as f64 * (interval / 12.0).exp2()) as f32
}

/// Build a fresh linear mapping for a container that is currently `length`
/// elements long.
///
/// The result must not be kept around across writes: the length of the
/// sortable can change mid-sort (merge sort builds new containers), so the
/// mapping is rebuilt for every observation.
#[inline]
pub fn scaled(length: usize, min_frequency: f32, max_frequency: f32) -> ScaledPitch {
    ScaledPitch {
        length,
        min_frequency,
        max_frequency,
    }
}

/// Linear mapping of `0..=length` onto `min_frequency..=max_frequency`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledPitch {
    length: usize,
    min_frequency: f32,
    max_frequency: f32,
}

impl ScaledPitch {
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Width of one interval in Hz.
    ///
    /// An empty container has no intervals to divide by, so a single step
    /// covers the whole range.
    pub fn step(&self) -> f64 {
        let width = (self.max_frequency - self.min_frequency) as f64;
        match self.length {
            0 => width,
            len => width / len as f64,
        }
    }

    /// `min + interval * step`, clamped to the range.
    ///
    /// Values larger than the container (or negative ones) land on the range
    /// edges rather than producing inaudible or absurd pitches. A range given
    /// upside down is clamped between the same two edges; a NaN edge is
    /// ignored.
    pub fn frequency(&self, interval: f64) -> f32 {
        let hz = self.min_frequency as f64 + interval * self.step();
        let low = self.min_frequency.min(self.max_frequency);
        let high = self.min_frequency.max(self.max_frequency);
        // `f32::clamp` panics on unordered or NaN bounds
        (hz as f32).max(low).min(high)
    }
}

/// Anything that can be heard as an interval.
///
/// Implemented for the primitive numbers. Sortables holding other element
/// types need a [`Sonify`](crate::sonify::Sonify) policy of their own.
pub trait Interval {
    fn interval(&self) -> f64;
}

macro_rules! impl_interval {
    ($($t:ty),*) => {
        $(
            impl Interval for $t {
                #[inline]
                fn interval(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_interval!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Interval + ?Sized> Interval for &T {
    #[inline]
    fn interval(&self) -> f64 {
        (**self).interval()
    }
}
