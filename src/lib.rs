//! Hear sorting algorithms.
//!
//! Every write into a [`MusicalSortable`] plays a tone whose pitch comes
//! from the index and the value being written, so each sort gets a sound of
//! its own.
//!
//! ```
//! use musicalsort::{tone, Algorithm, Config, Musician};
//!
//! let musician = Musician::new(tone::share(tone::Silent), Config::default())?;
//! let sorted = musician.sort(vec![5, 3, 1, 4, 2], Algorithm::Selection)?;
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//! # Ok::<(), musicalsort::Error>(())
//! ```
//!
//! To hear it, hand the musician a `tone::CpalEmitter::probe()?` instead of
//! [`tone::Silent`] (requires the default `cpal_sink` feature).
//!
//! Any sort written against [`Observable`] can be made audible with
//! [`musical`]; what is played on each write is decided by a
//! [`Sonify`] policy.

mod config;
mod error;
mod musical;
pub mod pitch;
mod sortable;
pub mod sonify;
pub mod sorts;
pub mod tone;

pub use config::Config;
pub use error::{Error, Result};
pub use musical::{musical, Algorithm, Musician, Sortable};
pub use sonify::{AssignmentOnly, EqualTempered, Muted, ScaledTones, Sonify};
pub use sortable::{MusicalSortable, Observable};
pub use sorts::{
    bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort, shell_sort, Sorted,
};
pub use tone::{play_note, scaled_play, SharedEmitter, Tone, ToneEmitter};
