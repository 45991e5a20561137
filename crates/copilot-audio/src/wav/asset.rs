//! Encoded WAV assets.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use tracing::debug;

use crate::buffer::AudioBuffer;
use crate::error::{SynthResult, SynthesisError};

use super::format::{WavFormat, HEADER_SIZE};
use super::pcm::hash_pcm;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

/// MIME type of every encoded asset.
pub const WAV_MIME_TYPE: &str = "audio/wav";

/// How an asset came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetOrigin {
    /// Encoded from a synthesized placeholder waveform.
    Synthesized,
    /// The fixed minimal tone.
    Fallback,
}

/// A complete, immutable mono 16-bit PCM WAV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAudioAsset {
    wav_data: Vec<u8>,
    pcm_hash: String,
    sample_rate: u32,
    frame_count: usize,
    origin: AssetOrigin,
}

impl EncodedAudioAsset {
    /// Complete WAV file bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.wav_data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.wav_data
    }

    /// The 44-byte header.
    pub fn header_bytes(&self) -> &[u8] {
        &self.wav_data[..HEADER_SIZE]
    }

    /// The PCM payload after the header.
    pub fn payload(&self) -> &[u8] {
        &self.wav_data[HEADER_SIZE..]
    }

    /// BLAKE3 hash of the PCM payload only.
    pub fn pcm_hash(&self) -> &str {
        &self.pcm_hash
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn origin(&self) -> AssetOrigin {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.wav_data.len()
    }

    /// Always false: empty buffers are never encoded.
    pub fn is_empty(&self) -> bool {
        self.wav_data.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count as f64 / self.sample_rate as f64
    }

    /// `data:audio/wav;base64,...` URL usable as a playback source.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", WAV_MIME_TYPE, STANDARD.encode(&self.wav_data))
    }

    /// Relabels where the asset came from.
    pub(crate) fn with_origin(mut self, origin: AssetOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub(crate) fn from_parts(
        wav_data: Vec<u8>,
        pcm_hash: String,
        sample_rate: u32,
        frame_count: usize,
        origin: AssetOrigin,
    ) -> Self {
        debug_assert_eq!(wav_data.len(), HEADER_SIZE + frame_count * 2);
        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            frame_count,
            origin,
        }
    }
}

/// Encodes a mono buffer into a WAV asset.
///
/// # Errors
/// * [`SynthesisError::EmptyBuffer`] when the buffer has no frames.
/// * [`SynthesisError::InvalidSampleRate`] when the byte rate of the buffer's
///   sample rate overflows the 32-bit header field.
/// * [`SynthesisError::PayloadTooLarge`] when the payload cannot be described
///   by 32-bit RIFF sizes.
///
/// [`crate::encode_or_fallback`] substitutes the fallback tone for any of these.
pub fn encode_buffer(buffer: &AudioBuffer) -> SynthResult<EncodedAudioAsset> {
    if buffer.is_empty() {
        return Err(SynthesisError::EmptyBuffer);
    }

    let format = WavFormat::mono(buffer.sample_rate());
    if format.byte_rate().is_none() {
        return Err(SynthesisError::InvalidSampleRate {
            rate: buffer.sample_rate(),
        });
    }

    let frames = buffer.frame_count();
    let fits = frames
        .checked_mul(2)
        .and_then(|size| u32::try_from(size).ok())
        .is_some_and(|size| size.checked_add(36).is_some());
    if !fits {
        return Err(SynthesisError::PayloadTooLarge { frames });
    }

    let pcm = samples_to_pcm16(buffer.samples());
    let pcm_hash = hash_pcm(&pcm);
    let wav_data = write_wav_to_vec(&format, &pcm)?;
    debug!(
        bytes = wav_data.len(),
        frames,
        pcm_hash = %pcm_hash,
        "encoded audio buffer"
    );

    Ok(EncodedAudioAsset::from_parts(
        wav_data,
        pcm_hash,
        buffer.sample_rate(),
        frames,
        AssetOrigin::Synthesized,
    ))
}
