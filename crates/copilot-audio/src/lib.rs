//! CreatorCopilot Voice Backend
//!
//! This crate produces voiceover audio for CreatorCopilot. Live text-to-speech
//! vendors are reached through the [`SpeechVendor`] trait; whenever a vendor is
//! not configured or fails, the crate answers with a deterministic
//! placeholder generated entirely locally.
//!
//! # Pipeline
//!
//! 1. **Synthesis** - a speech-cadence tone whose length follows the script
//!    length, clamped to 2-10 seconds ([`synth`])
//! 2. **Quantization** - clamp to `[-1, 1]` and scale to 16-bit PCM
//!    ([`wav::quantize_sample`])
//! 3. **Encoding** - a canonical 44-byte RIFF/WAVE header followed by the
//!    little-endian payload ([`wav::encode_buffer`])
//! 4. **Fallback** - a fixed 440 Hz tone whenever any of the above cannot
//!    proceed ([`fallback`])
//!
//! # Determinism
//!
//! Output depends only on the script length and the sample rate. The same
//! inputs give byte-identical WAV files on the same platform.
//!
//! # Example
//!
//! ```
//! use copilot_audio::synthesize_placeholder_audio;
//!
//! let asset = synthesize_placeholder_audio("Hello world", 44100);
//! assert_eq!(asset.len(), 176444);
//! assert_eq!(&asset.bytes()[0..4], b"RIFF");
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod fallback;
pub mod pipeline;
pub mod synth;
pub mod voice;
pub mod wav;

// Re-export main types at crate root
pub use buffer::AudioBuffer;
pub use config::{AudioConfig, CopilotConfig, VoiceConfig};
pub use error::{SynthResult, SynthesisError};
pub use fallback::{fallback_asset, fallback_buffer};
pub use pipeline::{
    encode_or_fallback, synthesize_placeholder_audio, try_synthesize_placeholder_audio,
};
pub use synth::{placeholder_duration, synthesize_waveform, DEFAULT_SAMPLE_RATE};
pub use voice::{
    simulated_latency, SpeechVendor, VendorAudio, VoiceRequest, VoiceService, VoiceSource,
    Voiceover, VoiceoverMetadata,
};
pub use wav::{encode_buffer, AssetOrigin, EncodedAudioAsset, WavHeader};
