//! Turning any sort into a musical one.

use core::fmt;
use core::str::FromStr;
use std::time::Instant;

use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::pitch::Interval;
use crate::sonify::{ScaledTones, Sonify};
use crate::sortable::{MusicalSortable, Observable};
use crate::sorts::{self, Sorted};
use crate::tone::SharedEmitter;

/// Input to a [`musical`] sort: either a plain `Vec`, which gets wrapped,
/// or a sortable that is already observed and is used as-is.
pub enum Sortable<T, S = ScaledTones> {
    Plain(Vec<T>),
    Observed(MusicalSortable<T, S>),
}

impl<T, S> From<Vec<T>> for Sortable<T, S> {
    fn from(data: Vec<T>) -> Self {
        Sortable::Plain(data)
    }
}

impl<T, S> From<MusicalSortable<T, S>> for Sortable<T, S> {
    fn from(sortable: MusicalSortable<T, S>) -> Self {
        Sortable::Observed(sortable)
    }
}

/// Make `sort` audible.
///
/// The returned function wraps plain input in a [`MusicalSortable`] that
/// plays through `emitter` with `policy`, runs `sort` on it, and hands back
/// whichever sequence ends up sorted: the new one for sorts that build one
/// (merge sort), the wrapped input for sorts that work in place.
///
/// ```
/// use musicalsort::{musical, sorts, tone, ScaledTones, Sortable};
///
/// let emitter = tone::share(tone::Silent);
/// let mut sort = musical(sorts::selection_sort, emitter, ScaledTones::default());
/// let sorted = sort(Sortable::from(vec![5, 3, 1, 4, 2])).unwrap();
/// assert_eq!(sorted.into_vec(), vec![1, 2, 3, 4, 5]);
/// ```
pub fn musical<T, S, F>(
    mut sort: F,
    emitter: SharedEmitter,
    policy: S,
) -> impl FnMut(Sortable<T, S>) -> Result<MusicalSortable<T, S>>
where
    T: Clone,
    S: Sonify<T> + Clone,
    F: FnMut(&mut MusicalSortable<T, S>) -> Result<Sorted<MusicalSortable<T, S>>>,
{
    move |input| {
        let mut sortable = match input {
            Sortable::Plain(data) => MusicalSortable::new(data, emitter.clone(), policy.clone()),
            Sortable::Observed(sortable) => sortable,
        };

        match sort(&mut sortable)? {
            Sorted::New(sorted) => Ok(sorted),
            Sorted::InPlace => Ok(sortable),
        }
    }
}

/// The sorts this crate knows how to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Insertion,
    Bubble,
    Shell,
    Merge,
    Quick,
}

impl Algorithm {
    pub fn all() -> [Algorithm; 6] {
        [
            Algorithm::Selection,
            Algorithm::Insertion,
            Algorithm::Bubble,
            Algorithm::Shell,
            Algorithm::Merge,
            Algorithm::Quick,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Bubble => "bubble",
            Algorithm::Shell => "shell",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Run this algorithm on `sortable`.
    pub fn run<S>(&self, sortable: &mut S) -> Result<Sorted<S>>
    where
        S: Observable,
        S::Item: PartialOrd + Clone,
    {
        match self {
            Algorithm::Selection => sorts::selection_sort(sortable),
            Algorithm::Insertion => sorts::insertion_sort(sortable),
            Algorithm::Bubble => sorts::bubble_sort(sortable),
            Algorithm::Shell => sorts::shell_sort(sortable),
            Algorithm::Merge => sorts::merge_sort(sortable),
            Algorithm::Quick => sorts::quick_sort(sortable),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        let wanted = wanted.strip_suffix("_sort").unwrap_or(wanted.as_str());
        Algorithm::all()
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
    }
}

/// Plays sorts with the default [`ScaledTones`] policy through one emitter.
pub struct Musician {
    emitter: SharedEmitter,
    config: Config,
}

impl Musician {
    pub fn new(emitter: SharedEmitter, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { emitter, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn emitter(&self) -> &SharedEmitter {
        &self.emitter
    }

    /// Sort `data` with `algorithm`, out loud.
    pub fn sort<T>(&self, data: Vec<T>, algorithm: Algorithm) -> Result<Vec<T>>
    where
        T: PartialOrd + Clone + Interval,
    {
        let policy = ScaledTones::new(&self.config);
        let len = data.len();
        info!(%algorithm, len, "sorting");

        let started = Instant::now();
        let mut sort = musical(
            |sortable: &mut MusicalSortable<T>| algorithm.run(sortable),
            self.emitter.clone(),
            policy,
        );
        let sorted = sort(Sortable::Plain(data))?;

        info!(%algorithm, len, elapsed = ?started.elapsed(), "sorted");
        Ok(sorted.into_vec())
    }
}
