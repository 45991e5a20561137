//! Mono 16-bit PCM format parameters.

/// Size of the canonical PCM WAV header in bytes.
pub const HEADER_SIZE: usize = 44;

/// `audio format` field value for uncompressed PCM.
pub const PCM_FORMAT_TAG: u16 = 1;

/// Format of every file this crate writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Mono, 16 bits per sample.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame across all channels.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second of audio, or `None` when the rate is too high for the
    /// 32-bit header field.
    pub fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(u32::from(self.block_align()))
    }
}
