//! Core WAV writing and PCM quantization.

use std::io::{self, Write};

use super::format::{WavFormat, HEADER_SIZE, PCM_FORMAT_TAG};

/// Full scale of a quantized sample. `-1.0` maps to `-32767`, never `i16::MIN`.
pub const PCM16_SCALE: f64 = 32767.0;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len())
        .ok()
        .filter(|size| size.checked_add(36).is_some())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "PCM payload too large for a RIFF container",
            )
        })?;
    let riff_size = 36 + data_size; // Everything after the 8-byte RIFF preamble
    let byte_rate = format.byte_rate().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "sample rate too high for a 32-bit byte rate",
        )
    })?;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&PCM_FORMAT_TAG.to_le_bytes())?;
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&byte_rate.to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a freshly allocated byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_SIZE + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Quantizes one sample to 16-bit PCM.
///
/// Out-of-range input is clamped to `[-1.0, 1.0]` first, so the result is
/// always within `[-32767, 32767]`. NaN maps to 0.
#[inline]
pub fn quantize_sample(sample: f64) -> i16 {
    let clipped = sample.clamp(-1.0, 1.0);
    // `as` saturates and maps NaN to 0.
    (clipped * PCM16_SCALE).round() as i16
}

/// Converts f64 samples to little-endian 16-bit PCM bytes.
///
/// # Arguments
/// * `samples` - Audio samples in f64 format
///
/// # Returns
/// PCM data, two bytes per sample, in frame order
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        pcm.extend_from_slice(&quantize_sample(sample).to_le_bytes());
    }

    pcm
}
