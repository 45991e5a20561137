//! Minimal fallback asset.
//!
//! A fixed two-second 440 Hz tone that can always be encoded. It is the last
//! resort whenever the placeholder pipeline cannot produce audio.

use std::f64::consts::PI;

use crate::buffer::AudioBuffer;
use crate::wav::{encode_buffer, AssetOrigin, EncodedAudioAsset, HEADER_SIZE};

/// Sample rate of the fallback tone.
pub const FALLBACK_SAMPLE_RATE: u32 = 22050;

/// Length of the fallback tone in seconds.
pub const FALLBACK_DURATION_SECONDS: f64 = 2.0;

/// Pitch of the fallback tone in Hz.
pub const FALLBACK_FREQUENCY: f64 = 440.0;

/// Frames in the fallback tone.
pub const FALLBACK_FRAMES: usize = 44100;

/// Total byte length of the fallback asset.
pub const FALLBACK_ASSET_LEN: usize = HEADER_SIZE + FALLBACK_FRAMES * 2;

#[inline]
fn fallback_sample(t: f64) -> f64 {
    0.1 * (2.0 * PI * FALLBACK_FREQUENCY * t).sin() * (-t).exp()
}

fn fallback_samples() -> Vec<f64> {
    let rate = FALLBACK_SAMPLE_RATE as f64;
    (0..FALLBACK_FRAMES)
        .map(|i| fallback_sample(i as f64 / rate))
        .collect()
}

/// The fallback tone as a buffer.
pub fn fallback_buffer() -> AudioBuffer {
    match AudioBuffer::new(FALLBACK_SAMPLE_RATE, fallback_samples()) {
        Ok(buffer) => buffer,
        // FALLBACK_SAMPLE_RATE is a non-zero constant.
        Err(_) => unreachable!("fallback sample rate is non-zero"),
    }
}

/// Encodes the fallback tone.
///
/// Total: the tone is non-empty and its rate and length are fixed constants
/// well inside the RIFF limits.
pub fn fallback_asset() -> EncodedAudioAsset {
    match encode_buffer(&fallback_buffer()) {
        Ok(asset) => asset.with_origin(AssetOrigin::Fallback),
        Err(err) => unreachable!("fallback tone failed to encode: {err}"),
    }
}
