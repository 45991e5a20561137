//! Error types for the voice backend.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthesisError>;

/// Errors that can occur while producing or reading voice assets.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Sample rate is zero or outside the supported range.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Buffer holds no frames, so there is nothing to encode.
    #[error("audio buffer has no frames")]
    EmptyBuffer,

    /// PCM payload does not fit in a RIFF size field.
    #[error("payload of {frames} frames exceeds the RIFF size limit")]
    PayloadTooLarge {
        /// Number of frames that were requested.
        frames: usize,
    },

    /// The speech vendor rejected or failed the request.
    #[error("speech vendor error: {message}")]
    Vendor {
        /// Error message.
        message: String,
    },

    /// Configuration value is out of range or malformed.
    #[error("invalid config '{field}': {message}")]
    InvalidConfig {
        /// Config field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// Bytes are not a readable PCM WAV file.
    #[error("invalid WAV data: {message}")]
    InvalidWav {
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthesisError {
    /// Creates a vendor error.
    pub fn vendor(message: impl Into<String>) -> Self {
        Self::Vendor {
            message: message.into(),
        }
    }

    /// Creates an invalid config error.
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid WAV error.
    pub fn invalid_wav(message: impl Into<String>) -> Self {
        Self::InvalidWav {
            message: message.into(),
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            SynthesisError::InvalidSampleRate { .. } => "SYNTH_001",
            SynthesisError::EmptyBuffer => "SYNTH_002",
            SynthesisError::PayloadTooLarge { .. } => "SYNTH_003",
            SynthesisError::Vendor { .. } => "SYNTH_004",
            SynthesisError::InvalidConfig { .. } => "SYNTH_005",
            SynthesisError::InvalidWav { .. } => "SYNTH_006",
            SynthesisError::Io(_) => "SYNTH_007",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "synthesis"
    }
}
