//! Speech-cadence placeholder waveform.
//!
//! Produces a drifting tone with an oscillating, decaying envelope whose length
//! tracks the script length. The output only needs to sound vaguely like
//! someone talking while a real voiceover is unavailable.

use std::f64::consts::PI;

use tracing::debug;

use crate::buffer::AudioBuffer;
use crate::error::{SynthResult, SynthesisError};

/// Sample rate used when the host does not report a native rate.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Seconds of audio per character of script.
pub const SECONDS_PER_CHAR: f64 = 0.1;

/// Shortest placeholder, in seconds.
pub const MIN_DURATION_SECONDS: f64 = 2.0;

/// Longest placeholder, in seconds.
pub const MAX_DURATION_SECONDS: f64 = 10.0;

/// Highest sample rate the synthesizer accepts. Bounds the buffer at
/// `MAX_SAMPLE_RATE * MAX_DURATION_SECONDS` frames.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Number of characters in the script, counted as Unicode scalar values.
pub fn text_length(text: &str) -> usize {
    text.chars().count()
}

/// Placeholder duration for a script, clamped to `[2.0, 10.0]` seconds.
pub fn placeholder_duration(text: &str) -> f64 {
    (text_length(text) as f64 * SECONDS_PER_CHAR).clamp(MIN_DURATION_SECONDS, MAX_DURATION_SECONDS)
}

/// Number of frames for a duration at the given rate.
pub fn frame_count_for(sample_rate: u32, duration_seconds: f64) -> usize {
    (sample_rate as f64 * duration_seconds).round() as usize
}

/// Value of the placeholder signal at time `t` seconds.
///
/// The carrier drifts around 200 Hz and the envelope pulses at roughly
/// syllable rate while decaying.
#[inline]
pub fn placeholder_sample(t: f64) -> f64 {
    let frequency = 200.0 + 100.0 * (2.0 * t).sin() + 50.0 * (5.0 * t).sin();
    let amplitude = 0.1 * (10.0 * t).sin() * (-0.5 * t).exp();
    amplitude * (2.0 * PI * frequency * t).sin()
}

/// Synthesizes the placeholder waveform for `text` at `sample_rate`.
///
/// # Errors
/// * [`SynthesisError::InvalidSampleRate`] when `sample_rate` is 0 or above
///   [`MAX_SAMPLE_RATE`]; checked before anything is allocated.
pub fn synthesize_waveform(text: &str, sample_rate: u32) -> SynthResult<AudioBuffer> {
    if sample_rate > MAX_SAMPLE_RATE {
        return Err(SynthesisError::InvalidSampleRate { rate: sample_rate });
    }
    let duration = placeholder_duration(text);
    let frames = frame_count_for(sample_rate, duration);

    debug!(
        chars = text_length(text),
        duration, sample_rate, frames, "synthesizing placeholder waveform"
    );

    AudioBuffer::from_fn(sample_rate, frames, placeholder_sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_clamps_short_text() {
        assert_eq!(placeholder_duration(""), 2.0);
        assert_eq!(placeholder_duration("Hello world"), 2.0);
    }

    #[test]
    fn test_duration_scales_with_length() {
        let text = "a".repeat(45);
        assert!((placeholder_duration(&text) - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_duration_clamps_long_text() {
        assert_eq!(placeholder_duration(&"x".repeat(200)), 10.0);
        assert_eq!(placeholder_duration(&"x".repeat(10_000)), 10.0);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert_eq!(text_length("héllo"), 5);
        assert_eq!(text_length("日本語"), 3);
    }

    #[test]
    fn test_frame_count() {
        assert_eq!(frame_count_for(44100, 2.0), 88200);
        assert_eq!(frame_count_for(48000, 10.0), 480000);
        assert_eq!(frame_count_for(22050, 2.5), 55125);
    }

    #[test]
    fn test_signal_starts_silent() {
        assert_eq!(placeholder_sample(0.0), 0.0);
    }

    #[test]
    fn test_signal_is_quiet() {
        for i in 0..10_000 {
            let t = i as f64 / 1000.0;
            assert!(placeholder_sample(t).abs() <= 0.1);
        }
    }

    #[test]
    fn test_synthesize_hello_world() {
        let buffer = synthesize_waveform("Hello world", 44100).unwrap();
        assert_eq!(buffer.sample_rate(), 44100);
        assert_eq!(buffer.frame_count(), 88200);
        assert!(buffer.samples().iter().any(|s| *s != 0.0));
    }

    #[test]
    fn test_synthesize_rejects_zero_rate() {
        assert!(matches!(
            synthesize_waveform("Hello", 0),
            Err(SynthesisError::InvalidSampleRate { rate: 0 })
        ));
    }

    #[test]
    fn test_synthesize_rejects_rates_above_max() {
        for rate in [MAX_SAMPLE_RATE + 1, 1_000_000_000, u32::MAX] {
            assert!(matches!(
                synthesize_waveform("Hello", rate),
                Err(SynthesisError::InvalidSampleRate { rate: r }) if r == rate
            ));
        }
    }

    #[test]
    fn test_synthesize_accepts_max_rate() {
        let long_script = "x".repeat(200);
        let buffer = synthesize_waveform(&long_script, MAX_SAMPLE_RATE).unwrap();
        assert_eq!(buffer.frame_count(), 1_920_000);
    }
}
