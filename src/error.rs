//! Error types shared by the sortable, the sorts and the tone emitters.

use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong while sorting out loud.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// No audio host on this machine could open an output stream.
    ///
    /// Raised once, while probing backends. `remediation` is a hint that can
    /// be shown to a user as-is.
    #[error("no audio backend available: {remediation}")]
    NoAudioBackend { remediation: String },

    /// The backend was selected but refused to build or start a stream.
    #[error("audio backend unavailable: {0}")]
    AudioBackendUnavailable(String),

    /// Index past the end of the sortable.
    #[error("index {index} out of range for sortable of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Operation exists in the API but has no implementation.
    #[error("{0} is not supported")]
    NotSupported(&'static str),

    /// Playback was cancelled mid-tone. The tone has already been silenced.
    #[error("playback interrupted")]
    PlaybackInterrupted,

    #[error("cannot play a tone of {frequency} Hz for {duration:?}")]
    InvalidTone { frequency: f32, duration: Duration },

    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = core::result::Result<T, Error>;
