//! JSON output types for machine-readable CLI output.
//!
//! Every command run with `--json` prints exactly one of these objects to
//! stdout, whether it succeeded or not.

use copilot_audio::{SynthesisError, VoiceoverMetadata, WavHeader};
use serde::Serialize;

/// Error codes for CLI operations.
///
/// Backend errors pass through with their own `SYNTH_XXX` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Config file could not be loaded
    pub const CONFIG: &str = "CLI_003";
    /// No script given
    pub const MISSING_SCRIPT: &str = "CLI_004";
    /// Async runtime could not be started
    pub const RUNTIME: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "SYNTH_006")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File path involved (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&SynthesisError> for JsonError {
    fn from(err: &SynthesisError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// JSON output for the `synth` command.
#[derive(Debug, Clone, Serialize)]
pub struct SynthOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SynthResultJson>,
}

/// Result of a successful `synth` run.
#[derive(Debug, Clone, Serialize)]
pub struct SynthResultJson {
    /// Where the audio was written, if anywhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(flatten)]
    pub voiceover: VoiceoverMetadata,
    /// Playable `data:` URL (only with `--data-url`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
    pub duration_ms: u64,
}

impl SynthOutput {
    pub fn success(result: SynthResultJson) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize)]
pub struct InspectOutput {
    pub success: bool,
    pub errors: Vec<JsonError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

/// Result of a successful `inspect` run.
#[derive(Debug, Clone, Serialize)]
pub struct InspectResult {
    pub input: String,
    pub file_size: usize,
    pub header: WavHeader,
    pub frame_count: usize,
    pub duration_seconds: f64,
    /// Header fields agree with each other and the file length
    pub consistent: bool,
    /// BLAKE3 hash of the whole file
    pub file_hash: String,
    /// BLAKE3 hash of the PCM payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Smallest and largest decoded sample
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_range: Option<(i16, i16)>,
}

impl InspectOutput {
    pub fn success(result: InspectResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}
