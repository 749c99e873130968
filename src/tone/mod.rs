//! Tone events and the emitters that play them.
//!
//! A [`ToneEmitter`] turns one [`Tone`] into sound and blocks until it is
//! over. The sortables never know which emitter they hold:
//! - [`CpalEmitter`] plays through the system's default output device
//!   (requires the `cpal_sink` feature)
//! - [`Silent`] swallows everything
//! - [`Recorder`] keeps every tone for later inspection

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::trace;

use crate::error::{Error, Result};
use crate::pitch::{self, ScaledPitch, BASE_FREQUENCY};

#[cfg(feature = "cpal_sink")]
mod device;
pub mod sine;

#[cfg(feature = "cpal_sink")]
pub use device::{CpalEmitter, Interrupt};
pub use sine::Sine;

/// A single monophonic beep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub duration: Duration,
}

impl Tone {
    pub fn new(frequency: f32, duration: Duration) -> Self {
        Self {
            frequency,
            duration,
        }
    }

    /// A tone is playable if its pitch is a positive finite number and it
    /// lasts for some time.
    pub fn validate(&self) -> Result<()> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 || self.duration.is_zero() {
            return Err(Error::InvalidTone {
                frequency: self.frequency,
                duration: self.duration,
            });
        }
        Ok(())
    }
}

/// Something that can make a tone audible.
pub trait ToneEmitter {
    /// Play `tone`, returning once it has finished.
    fn emit(&mut self, tone: Tone) -> Result<()>;
}

/// The emitter handle held by every sortable of one sort run.
///
/// Sub-sortables (merge sort halves, merge buffers) share it with their parent.
pub type SharedEmitter = Rc<RefCell<dyn ToneEmitter>>;

/// Wrap an emitter so sortables can share it.
pub fn share<E: ToneEmitter + 'static>(emitter: E) -> SharedEmitter {
    Rc::new(RefCell::new(emitter))
}

/// Plays nothing, returns immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl ToneEmitter for Silent {
    fn emit(&mut self, tone: Tone) -> Result<()> {
        tone.validate()
    }
}

/// Keeps every tone instead of playing it.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    tones: Vec<Tone>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    pub fn frequencies(&self) -> Vec<f32> {
        self.tones.iter().map(|t| t.frequency).collect()
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    pub fn clear(&mut self) {
        self.tones.clear();
    }
}

impl ToneEmitter for Recorder {
    fn emit(&mut self, tone: Tone) -> Result<()> {
        tone.validate()?;
        self.tones.push(tone);
        Ok(())
    }
}

/// Play the note `interval` semitones away from [`BASE_FREQUENCY`].
pub fn play_note<E>(emitter: &mut E, interval: f64, duration: Duration) -> Result<()>
where
    E: ToneEmitter + ?Sized,
{
    let frequency = pitch::equal_temperament(BASE_FREQUENCY, interval);
    trace!(interval, frequency, "note");
    emitter.emit(Tone::new(frequency, duration))
}

/// Divide `min_frequency..max_frequency` into `length` steps and return
/// something that plays them.
///
/// ```
/// use std::time::Duration;
/// use musicalsort::tone::{scaled_play, Recorder};
///
/// let mut recorder = Recorder::new();
/// let play = scaled_play(20, 200.0, 2000.0);
/// play.play(&mut recorder, 10.0, Duration::from_millis(5)).unwrap();
/// assert_eq!(recorder.frequencies(), vec![1100.0]);
/// ```
pub fn scaled_play(length: usize, min_frequency: f32, max_frequency: f32) -> ScaledPlay {
    ScaledPlay {
        pitch: pitch::scaled(length, min_frequency, max_frequency),
    }
}

/// A note player bound to one [`ScaledPitch`]. See [`scaled_play`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledPlay {
    pitch: ScaledPitch,
}

impl ScaledPlay {
    pub fn pitch(&self) -> &ScaledPitch {
        &self.pitch
    }

    pub fn frequency(&self, interval: f64) -> f32 {
        self.pitch.frequency(interval)
    }

    pub fn play<E>(&self, emitter: &mut E, interval: f64, duration: Duration) -> Result<()>
    where
        E: ToneEmitter + ?Sized,
    {
        let frequency = self.pitch.frequency(interval);
        trace!(interval, frequency, length = self.pitch.length(), "scaled note");
        emitter.emit(Tone::new(frequency, duration))
    }
}
