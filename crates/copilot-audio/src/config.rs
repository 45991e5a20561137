//! Voice backend configuration.
//!
//! Configuration is built once at startup (from defaults, a JSON file, or
//! both) and handed to [`crate::VoiceService::new`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SynthResult, SynthesisError};
use crate::synth::DEFAULT_SAMPLE_RATE;
pub use crate::synth::MAX_SAMPLE_RATE;

/// Lowest accepted output sample rate.
pub const MIN_SAMPLE_RATE: u32 = 8000;

/// Voice id used when a request does not name one.
pub const DEFAULT_VOICE_ID: &str = "placeholder";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopilotConfig {
    pub audio: AudioConfig,
    pub voice: VoiceConfig,
}

/// Output audio settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Native sample rate of the playback host (default: 44100)
    pub sample_rate: u32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Voice generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Whether the live speech vendor may be called (default: false)
    pub vendor_enabled: bool,
    /// Voice id for requests that do not specify one
    pub default_voice_id: String,
    /// Delay synthetic results to mimic vendor latency (default: true)
    pub simulate_latency: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            vendor_enabled: false,
            default_voice_id: DEFAULT_VOICE_ID.to_string(),
            simulate_latency: true,
        }
    }
}

impl CopilotConfig {
    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> SynthResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SynthesisError::invalid_config("<json>", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_json_file(path: &Path) -> SynthResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> SynthResult<()> {
        let rate = self.audio.sample_rate;
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&rate) {
            return Err(SynthesisError::invalid_config(
                "audio.sample_rate",
                format!(
                    "{} is outside {}..={}",
                    rate, MIN_SAMPLE_RATE, MAX_SAMPLE_RATE
                ),
            ));
        }
        if self.voice.default_voice_id.trim().is_empty() {
            return Err(SynthesisError::invalid_config(
                "voice.default_voice_id",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CopilotConfig::default();
        assert_eq!(config.audio.sample_rate, 44100);
        assert!(!config.voice.vendor_enabled);
        assert!(config.voice.simulate_latency);
        assert_eq!(config.voice.default_voice_id, "placeholder");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CopilotConfig::from_json_str(r#"{"audio": {"sample_rate": 48000}}"#).unwrap();
        assert_eq!(config.audio.sample_rate, 48000);
        assert_eq!(config.voice, VoiceConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(
            CopilotConfig::from_json_str("{}").unwrap(),
            CopilotConfig::default()
        );
    }

    #[test]
    fn test_rejects_out_of_range_sample_rate() {
        for rate in [0, 7999, 192_001] {
            let json = format!(r#"{{"audio": {{"sample_rate": {}}}}}"#, rate);
            let err = CopilotConfig::from_json_str(&json).unwrap_err();
            assert!(err.to_string().contains("audio.sample_rate"), "{err}");
        }
    }

    #[test]
    fn test_rejects_blank_voice_id() {
        let err =
            CopilotConfig::from_json_str(r#"{"voice": {"default_voice_id": "  "}}"#).unwrap_err();
        assert_eq!(err.code(), "SYNTH_005");
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            CopilotConfig::from_json_str("{not json"),
            Err(SynthesisError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"voice": {{"vendor_enabled": true, "simulate_latency": false}}}}"#
        )
        .unwrap();

        let config = CopilotConfig::from_json_file(file.path()).unwrap();
        assert!(config.voice.vendor_enabled);
        assert!(!config.voice.simulate_latency);
        assert_eq!(config.audio.sample_rate, 44100);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CopilotConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SynthesisError::Io(_)));
    }
}
