//! Audio output: short synthesized tones played through rodio.
//!
//! Cues are resolved against a closed catalog; an unknown cue or an
//! unavailable output device degrades to silence. The device probe runs
//! once at startup and failure is reported on stderr exactly once, before
//! the terminal enters raw mode.

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

use crate::types::SoundCue;

const SAMPLE_RATE: u32 = 44_100;

/// A pure sine tone
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tone {
    frequency: f32,
    duration_ms: u32,
    volume: f32,
}

/// Catalog lookup; `None` means the cue has no tone and stays silent.
fn tone(cue: SoundCue) -> Option<Tone> {
    match cue {
        SoundCue::Eat => Some(Tone {
            frequency: 660.0,
            duration_ms: 120,
            volume: 0.35,
        }),
        SoundCue::Bump => Some(Tone {
            frequency: 110.0,
            duration_ms: 280,
            volume: 0.45,
        }),
    }
}

fn synthesize(tone: Tone) -> Vec<f32> {
    let samples = (SAMPLE_RATE as u64 * tone.duration_ms as u64 / 1000) as usize;
    (0..samples)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            tone.volume * (std::f32::consts::TAU * tone.frequency * t).sin()
        })
        .collect()
}

pub struct Audio {
    output: Option<(OutputStream, OutputStreamHandle)>,
    enabled: bool,
}

impl Audio {
    /// Probe the default output device; on failure stay permanently silent.
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(err) => {
                eprintln!("audio unavailable ({err}), continuing without sound");
                None
            }
        };
        Self {
            output,
            enabled: true,
        }
    }

    pub fn is_available(&self) -> bool {
        self.output.is_some()
    }

    /// Mirror of the configuration's sound toggle
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Fire-and-forget playback; never blocks, never fails.
    pub fn play(&self, cue: SoundCue) {
        if !self.enabled {
            return;
        }
        let Some((_, handle)) = &self.output else {
            return;
        };
        let Some(tone) = tone(cue) else {
            return;
        };
        if let Ok(sink) = Sink::try_new(handle) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, synthesize(tone)));
            sink.detach();
        }
    }
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}
