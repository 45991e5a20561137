//! Mono sample buffer produced by the synthesizers.

use crate::error::{SynthResult, SynthesisError};

/// A single-channel buffer of floating-point samples.
///
/// Samples are nominally in `[-1.0, 1.0]`; anything outside is clamped when the
/// buffer is quantized. The buffer is built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    samples: Vec<f64>,
}

impl AudioBuffer {
    /// Channel count. Only mono is produced.
    pub const CHANNELS: u16 = 1;

    /// Creates a buffer, rejecting a zero sample rate.
    pub fn new(sample_rate: u32, samples: Vec<f64>) -> SynthResult<Self> {
        if sample_rate == 0 {
            return Err(SynthesisError::InvalidSampleRate { rate: sample_rate });
        }
        Ok(Self {
            sample_rate,
            samples,
        })
    }

    /// Fills `frame_count` frames from a function of time in seconds.
    pub fn from_fn<F>(sample_rate: u32, frame_count: usize, mut f: F) -> SynthResult<Self>
    where
        F: FnMut(f64) -> f64,
    {
        if sample_rate == 0 {
            return Err(SynthesisError::InvalidSampleRate { rate: sample_rate });
        }
        let rate = sample_rate as f64;
        let samples = (0..frame_count).map(|i| f(i as f64 / rate)).collect();
        Ok(Self {
            sample_rate,
            samples,
        })
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of frames (one sample per frame for mono).
    pub fn frame_count(&self) -> usize {
        self.samples.len()
    }

    pub fn channel_count(&self) -> u16 {
        Self::CHANNELS
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
