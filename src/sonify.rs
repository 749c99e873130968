//! Sonification policies: what a sortable plays when it is written to.
//!
//! A [`MusicalSortable`](crate::MusicalSortable) calls its policy around
//! every `set` and every `insert`:
//!
//! ```text
//! pre_assignment(index, value) -> data[index] = value -> post_assignment(index, value)
//! pre_insertion(index, value)  -> data.insert(index, value) -> post_insertion(index, value)
//! ```
//!
//! `len` is the length of the sortable at the time of the call (before the
//! mutation for `pre_*`, after it for `post_*`). Every hook defaults to
//! doing nothing, so a policy only overrides what it wants to hear.

use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::pitch::{self, Interval};
use crate::tone::{scaled_play, Tone, ToneEmitter};

/// Hooks invoked by a sortable around each mutation.
pub trait Sonify<T> {
    fn pre_assignment(
        &mut self,
        _emitter: &mut dyn ToneEmitter,
        _len: usize,
        _index: usize,
        _value: &T,
    ) -> Result<()> {
        Ok(())
    }

    fn post_assignment(
        &mut self,
        _emitter: &mut dyn ToneEmitter,
        _len: usize,
        _index: usize,
        _value: &T,
    ) -> Result<()> {
        Ok(())
    }

    fn pre_insertion(
        &mut self,
        _emitter: &mut dyn ToneEmitter,
        _len: usize,
        _index: usize,
        _value: &T,
    ) -> Result<()> {
        Ok(())
    }

    fn post_insertion(
        &mut self,
        _emitter: &mut dyn ToneEmitter,
        _len: usize,
        _index: usize,
        _value: &T,
    ) -> Result<()> {
        Ok(())
    }
}

/// The default: before each write or insertion play the index, then the
/// value, both scaled across the sortable's current length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledTones {
    pub min_frequency: f32,
    pub max_frequency: f32,
    pub duration: Duration,
}

impl ScaledTones {
    pub fn new(config: &Config) -> Self {
        Self {
            min_frequency: config.min_frequency,
            max_frequency: config.max_frequency,
            duration: config.duration,
        }
    }

    fn play<T: Interval>(
        &self,
        emitter: &mut dyn ToneEmitter,
        len: usize,
        index: usize,
        value: &T,
    ) -> Result<()> {
        // Rebuilt on every call: the length moves while a sort runs
        let play = scaled_play(len, self.min_frequency, self.max_frequency);
        play.play(emitter, index as f64, self.duration)?;
        play.play(emitter, value.interval(), self.duration)
    }
}

impl Default for ScaledTones {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl<T: Interval> Sonify<T> for ScaledTones {
    fn pre_assignment(
        &mut self,
        emitter: &mut dyn ToneEmitter,
        len: usize,
        index: usize,
        value: &T,
    ) -> Result<()> {
        self.play(emitter, len, index, value)
    }

    fn pre_insertion(
        &mut self,
        emitter: &mut dyn ToneEmitter,
        len: usize,
        index: usize,
        value: &T,
    ) -> Result<()> {
        self.play(emitter, len, index, value)
    }
}

/// Index and value as semitones above a base pitch, whatever the length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EqualTempered {
    pub base_frequency: f32,
    pub duration: Duration,
}

impl EqualTempered {
    pub fn new(config: &Config) -> Self {
        Self {
            base_frequency: config.base_frequency,
            duration: config.duration,
        }
    }

    fn note(&self, emitter: &mut dyn ToneEmitter, interval: f64) -> Result<()> {
        let frequency = pitch::equal_temperament(self.base_frequency, interval);
        emitter.emit(Tone::new(frequency, self.duration))
    }
}

impl<T: Interval> Sonify<T> for EqualTempered {
    fn pre_assignment(
        &mut self,
        emitter: &mut dyn ToneEmitter,
        _len: usize,
        index: usize,
        value: &T,
    ) -> Result<()> {
        self.note(emitter, index as f64)?;
        self.note(emitter, value.interval())
    }

    fn pre_insertion(
        &mut self,
        emitter: &mut dyn ToneEmitter,
        _len: usize,
        index: usize,
        value: &T,
    ) -> Result<()> {
        self.note(emitter, index as f64)?;
        self.note(emitter, value.interval())
    }
}

/// Plays whatever `P` plays on writes, and nothing on insertions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AssignmentOnly<P>(pub P);

impl<T, P: Sonify<T>> Sonify<T> for AssignmentOnly<P> {
    fn pre_assignment(
        &mut self,
        emitter: &mut dyn ToneEmitter,
        len: usize,
        index: usize,
        value: &T,
    ) -> Result<()> {
        self.0.pre_assignment(emitter, len, index, value)
    }

    fn post_assignment(
        &mut self,
        emitter: &mut dyn ToneEmitter,
        len: usize,
        index: usize,
        value: &T,
    ) -> Result<()> {
        self.0.post_assignment(emitter, len, index, value)
    }
}

/// Plays nothing at all.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Muted;

impl<T> Sonify<T> for Muted {}
