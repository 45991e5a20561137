//! Placeholder voice pipeline: synthesize, quantize, encode.

use tracing::warn;

use crate::buffer::AudioBuffer;
use crate::error::{SynthResult, SynthesisError};
use crate::fallback::fallback_asset;
use crate::synth::synthesize_waveform;
use crate::wav::{encode_buffer, EncodedAudioAsset};

/// Runs the placeholder pipeline, surfacing any failure.
///
/// # Errors
/// * [`SynthesisError::InvalidSampleRate`] for a zero sample rate or one
///   above [`crate::synth::MAX_SAMPLE_RATE`].
pub fn try_synthesize_placeholder_audio(
    text: &str,
    sample_rate: u32,
) -> SynthResult<EncodedAudioAsset> {
    let buffer = synthesize_waveform(text, sample_rate)?;
    encode_buffer(&buffer)
}

/// Encodes `buffer`, substituting [`fallback_asset`] when it cannot be
/// encoded (no frames, or a rate or length the header cannot describe).
pub fn encode_or_fallback(buffer: &AudioBuffer) -> EncodedAudioAsset {
    match encode_buffer(buffer) {
        Ok(asset) => asset,
        Err(err) => use_fallback(&err, buffer.sample_rate()),
    }
}

/// Produces placeholder audio for `text`, never failing.
///
/// Any pipeline error is logged and replaced with [`fallback_asset`].
pub fn synthesize_placeholder_audio(text: &str, sample_rate: u32) -> EncodedAudioAsset {
    match synthesize_waveform(text, sample_rate) {
        Ok(buffer) => encode_or_fallback(&buffer),
        Err(err) => use_fallback(&err, sample_rate),
    }
}

fn use_fallback(err: &SynthesisError, sample_rate: u32) -> EncodedAudioAsset {
    warn!(
        code = err.code(),
        error = %err,
        sample_rate,
        "placeholder synthesis failed, using fallback tone"
    );
    fallback_asset()
}
