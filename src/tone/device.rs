//! Tone output through CPAL.
//!
//! [`CpalEmitter::probe`] walks the audio hosts CPAL knows about for this
//! platform and opens the default output device of the first one that works.
//! Tones are rendered by [`Sine`] on the caller's thread and handed to the
//! stream callback through a lock-free ring buffer.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample};
use dasp_graph::Buffer;
use rtrb::{Consumer, Producer, RingBuffer};
use tracing::{debug, info, trace, warn};

use super::{Sine, Tone, ToneEmitter};
use crate::config::Config;
use crate::error::{Error, Result};

/// How often a blocked `emit` wakes up to check the buffer and the interrupt.
const POLL: Duration = Duration::from_millis(1);

/// Cancels the tone currently playing.
///
/// Cloneable and `Send`, so it can be handed to a signal handler or another
/// thread. Once triggered every `emit` fails with
/// [`Error::PlaybackInterrupted`] until [`Interrupt::reset`] is called.
#[derive(Clone, Debug, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// State shared between the emitter and the stream callback.
#[derive(Default)]
struct StreamState {
    /// Samples pushed but not yet consumed by the device.
    queued: AtomicUsize,
    /// While set the callback throws queued samples away instead of playing them.
    muted: AtomicBool,
    /// A tone is being emitted; an empty buffer now is an underrun.
    playing: AtomicBool,
    had_underrun: AtomicBool,
    /// The backend reported a stream error; nothing queued will be consumed.
    failed: AtomicBool,
}

impl StreamState {
    /// Why a blocked `emit` should give up, if it should.
    fn halted(&self, interrupt: &Interrupt) -> Result<()> {
        if interrupt.is_triggered() {
            return Err(Error::PlaybackInterrupted);
        }
        if self.failed.load(Ordering::SeqCst) {
            return Err(Error::AudioBackendUnavailable("output stream failed".into()));
        }
        Ok(())
    }

    /// Block until the device has played everything queued.
    fn drain(&self, interrupt: &Interrupt) -> Result<()> {
        while self.queued.load(Ordering::SeqCst) > 0 {
            self.halted(interrupt)?;
            sleep(POLL);
        }
        Ok(())
    }
}

/// Block until `needed` samples fit in the ring buffer.
fn wait_for_slots(
    buffer: &Producer<f32>,
    needed: usize,
    state: &StreamState,
    interrupt: &Interrupt,
) -> Result<()> {
    while buffer.slots() < needed {
        state.halted(interrupt)?;
        sleep(POLL);
    }
    Ok(())
}

/// Stops the tone on every way out of `emit`, including early returns and
/// panics: queued samples are discarded and the device falls silent.
struct Voice<'a> {
    state: &'a StreamState,
    drain_limit: Duration,
    finished: bool,
}

impl<'a> Voice<'a> {
    fn start(state: &'a StreamState, drain_limit: Duration) -> Self {
        state.muted.store(false, Ordering::SeqCst);
        state.playing.store(true, Ordering::SeqCst);
        Self {
            state,
            drain_limit,
            finished: false,
        }
    }

    /// The tone played to the end; nothing left to cut off.
    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for Voice<'_> {
    fn drop(&mut self) {
        self.state.playing.store(false, Ordering::SeqCst);
        if self.finished {
            return;
        }

        self.state.muted.store(true, Ordering::SeqCst);
        let mut waited = Duration::ZERO;
        while self.state.queued.load(Ordering::SeqCst) > 0
            && !self.state.failed.load(Ordering::SeqCst)
            && waited < self.drain_limit
        {
            sleep(POLL);
            waited += POLL;
        }
        debug!(?waited, "tone stopped early");
    }
}

/// Plays tones on the default output device of the first usable audio host.
pub struct CpalEmitter {
    stream: cpal::Stream,
    buffer: Producer<f32>,
    state: Arc<StreamState>,
    interrupt: Interrupt,
    name: String,
    host: cpal::HostId,
    sample_rate: u32,
    channels: usize,
    amplitude: f32,
}

impl CpalEmitter {
    /// Probe for a backend with the default [`Config`].
    pub fn probe() -> Result<Self> {
        Self::probe_with(&Config::default())
    }

    /// Try every host CPAL offers on this platform, in CPAL's order of
    /// preference, and keep the first one that opens a stream.
    pub fn probe_with(config: &Config) -> Result<Self> {
        config.validate()?;

        for id in cpal::available_hosts() {
            let host = match cpal::host_from_id(id) {
                Ok(host) => host,
                Err(err) => {
                    debug!(host = id.name(), %err, "audio host unavailable");
                    continue;
                }
            };

            match Self::open(&host, config) {
                Ok(emitter) => {
                    info!(
                        host = id.name(),
                        device = %emitter.name,
                        sample_rate = emitter.sample_rate,
                        channels = emitter.channels,
                        "audio output ready"
                    );
                    return Ok(emitter);
                }
                Err(err) => debug!(host = id.name(), %err, "audio host rejected"),
            }
        }

        Err(Error::NoAudioBackend {
            remediation: remediation().into(),
        })
    }

    /// Open the default output device of `host`.
    pub fn open(host: &cpal::Host, config: &Config) -> Result<Self> {
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::AudioBackendUnavailable("no default output device".into()))?;
        let supported = device
            .default_output_config()
            .map_err(|err| Error::AudioBackendUnavailable(err.to_string()))?;
        let name = device.name().unwrap_or_else(|_| "Unknown".into());

        let channels = supported.channels() as usize;
        let sample_format = supported.sample_format();
        let stream_config = supported.config();
        let sample_rate = stream_config.sample_rate.0;

        // Ring buffer sized for ~100ms of audio to handle scheduling jitter
        let buffer_samples = ((sample_rate as f32 * 0.1) as usize) * channels;
        let buffer_size = buffer_samples.next_power_of_two().max(8192);
        let (producer, consumer) = RingBuffer::<f32>::new(buffer_size);

        let state = Arc::new(StreamState::default());
        let shared = Arc::clone(&state);
        let stream = match sample_format {
            SampleFormat::F32 => build_stream::<f32>(&device, &stream_config, consumer, shared),
            SampleFormat::I16 => build_stream::<i16>(&device, &stream_config, consumer, shared),
            SampleFormat::U16 => build_stream::<u16>(&device, &stream_config, consumer, shared),
            other => {
                return Err(Error::AudioBackendUnavailable(format!(
                    "unsupported sample format {other:?}"
                )))
            }
        }
        .map_err(|err| Error::AudioBackendUnavailable(err.to_string()))?;

        stream
            .play()
            .map_err(|err| Error::AudioBackendUnavailable(err.to_string()))?;

        Ok(Self {
            stream,
            buffer: producer,
            state,
            interrupt: Interrupt::default(),
            name,
            host: host.id(),
            sample_rate,
            channels,
            amplitude: config.amplitude,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> cpal::HostId {
        self.host
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// A handle that cancels whatever this emitter is playing.
    pub fn interrupt_handle(&self) -> Interrupt {
        self.interrupt.clone()
    }

    /// Check and clear the underrun flag
    pub fn check_underrun(&self) -> bool {
        self.state.had_underrun.swap(false, Ordering::Relaxed)
    }

    /// Stop the stream and release the device.
    pub fn shutdown(self) -> Result<()> {
        self.stream
            .pause()
            .map_err(|err| Error::AudioBackendUnavailable(err.to_string()))?;
        debug!(device = %self.name, "audio output released");
        Ok(())
    }

    /// Longest time the buffer can take to play out.
    fn drain_limit(&self) -> Duration {
        let frames = self.buffer.buffer().capacity() / self.channels.max(1);
        Duration::from_secs_f64(frames as f64 / self.sample_rate as f64) + POLL
    }
}

impl ToneEmitter for CpalEmitter {
    fn emit(&mut self, tone: Tone) -> Result<()> {
        tone.validate()?;
        self.state.halted(&self.interrupt)?;
        trace!(frequency = tone.frequency, duration = ?tone.duration, "tone");

        let state = self.state.clone();
        let voice = Voice::start(&state, self.drain_limit());

        let mut sine = Sine::new(tone.frequency, self.sample_rate, tone.duration)
            .with_amplitude(self.amplitude);
        let mut block = Buffer::default();
        let mut first = true;

        while !sine.is_finished() {
            state.halted(&self.interrupt)?;

            let count = sine.process(&mut block);
            let needed = count * self.channels;
            wait_for_slots(&self.buffer, needed, &state, &self.interrupt)?;

            // Count before pushing so the callback never subtracts more than was added
            state.queued.fetch_add(needed, Ordering::SeqCst);
            // Interleave: the same mono sample on every channel
            for &sample in block.iter().take(count) {
                for _ in 0..self.channels {
                    // Slots were checked above
                    let _ = self.buffer.push(sample);
                }
            }

            // The device may have polled before anything was queued
            if first {
                self.check_underrun();
                first = false;
            }
        }

        if self.check_underrun() {
            warn!(frequency = tone.frequency, "output buffer ran dry mid-tone");
        }

        // Block until the device has actually played the tone
        state.drain(&self.interrupt)?;

        voice.finish();
        Ok(())
    }
}

fn build_stream<S>(
    device: &cpal::Device,
    stream_config: &cpal::StreamConfig,
    mut consumer: Consumer<f32>,
    state: Arc<StreamState>,
) -> core::result::Result<cpal::Stream, cpal::BuildStreamError>
where
    S: SizedSample + FromSample<f32>,
{
    let errors = Arc::clone(&state);
    device.build_output_stream(
        stream_config,
        move |data: &mut [S], _: &cpal::OutputCallbackInfo| {
            let muted = state.muted.load(Ordering::SeqCst);
            let mut popped = 0;
            let mut underrun = false;

            for sample in data.iter_mut() {
                let s = match consumer.pop() {
                    Ok(v) => {
                        popped += 1;
                        if muted {
                            0.0
                        } else {
                            v
                        }
                    }
                    Err(_) => {
                        underrun = true;
                        0.0
                    }
                };
                *sample = S::from_sample(s.clamp(-1.0, 1.0));
            }

            if popped > 0 {
                state.queued.fetch_sub(popped, Ordering::SeqCst);
            }
            if underrun && !muted && state.playing.load(Ordering::Relaxed) {
                state.had_underrun.store(true, Ordering::Relaxed);
            }
        },
        move |err| {
            warn!(?err, "CPAL stream error");
            errors.failed.store(true, Ordering::SeqCst);
        },
        None,
    )
}

/// What to tell a user whose machine has no working audio host.
fn remediation() -> &'static str {
    if cfg!(target_os = "windows") {
        "WASAPI could not open an output device. Check that the Windows Audio \
         service is running and that an output device is enabled."
    } else if cfg!(target_os = "macos") {
        "CoreAudio could not open an output device. Pick an output device under \
         System Settings > Sound."
    } else if cfg!(target_os = "linux") {
        "No ALSA output device could be opened. Install the ALSA runtime \
         (libasound2 / alsa-lib) and make sure PulseAudio or PipeWire exposes an \
         ALSA device to hear the tones."
    } else {
        "This platform has no supported audio host. Use the silent emitter instead."
    }
}
