//! Parsing of the canonical 44-byte PCM WAV header.

use serde::Serialize;

use crate::error::{SynthResult, SynthesisError};

use super::format::{HEADER_SIZE, PCM_FORMAT_TAG};

/// Decoded fields of a canonical PCM WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavHeader {
    /// RIFF chunk size (file length minus 8).
    pub riff_size: u32,
    /// Audio format tag (1 = PCM).
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    /// Size of the data chunk payload in bytes.
    pub data_size: u32,
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

impl WavHeader {
    /// Parses the fixed header layout written by [`super::write_wav`].
    ///
    /// Only the canonical layout (`fmt ` at 12, `data` at 36) is accepted.
    pub fn parse(bytes: &[u8]) -> SynthResult<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(SynthesisError::invalid_wav(format!(
                "expected at least {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }
        if &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
            return Err(SynthesisError::invalid_wav("missing RIFF/WAVE magic"));
        }
        if &bytes[12..16] != b"fmt " || read_u32(bytes, 16) != 16 {
            return Err(SynthesisError::invalid_wav("missing 16-byte fmt chunk"));
        }
        if &bytes[36..40] != b"data" {
            return Err(SynthesisError::invalid_wav("missing data chunk at offset 36"));
        }

        let header = Self {
            riff_size: read_u32(bytes, 4),
            audio_format: read_u16(bytes, 20),
            channels: read_u16(bytes, 22),
            sample_rate: read_u32(bytes, 24),
            byte_rate: read_u32(bytes, 28),
            block_align: read_u16(bytes, 32),
            bits_per_sample: read_u16(bytes, 34),
            data_size: read_u32(bytes, 40),
        };

        if header.audio_format != PCM_FORMAT_TAG {
            return Err(SynthesisError::invalid_wav(format!(
                "unsupported audio format {}",
                header.audio_format
            )));
        }
        if header.channels == 0 || header.sample_rate == 0 {
            return Err(SynthesisError::invalid_wav(
                "channel count and sample rate must be non-zero",
            ));
        }

        Ok(header)
    }

    /// Number of frames declared by the data chunk.
    pub fn frame_count(&self) -> usize {
        if self.block_align == 0 {
            return 0;
        }
        self.data_size as usize / self.block_align as usize
    }

    /// Declared duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Whether the header's derived fields agree with each other and with
    /// the actual file length.
    pub fn is_consistent(&self, file_len: usize) -> bool {
        let expected_align = self.channels as u32 * (self.bits_per_sample as u32 / 8);
        self.block_align as u32 == expected_align
            && self.byte_rate as u64 == self.sample_rate as u64 * expected_align as u64
            && self.riff_size as u64 == 36 + self.data_size as u64
            && file_len as u64 == HEADER_SIZE as u64 + self.data_size as u64
    }
}
