//! Voiceover generation with a live vendor path and a synthetic fallback.
//!
//! The service is constructed once from [`CopilotConfig`] and shared by
//! reference. When the vendor is disabled, missing, or fails, requests are
//! answered by the placeholder pipeline after a short simulated delay.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::CopilotConfig;
use crate::error::{SynthResult, SynthesisError};
use crate::pipeline::synthesize_placeholder_audio;
use crate::synth::text_length;
use crate::wav::{compute_pcm_hash, AssetOrigin, EncodedAudioAsset, WavHeader, WAV_MIME_TYPE};

/// Per-character share of the simulated vendor latency.
pub const LATENCY_PER_CHAR: Duration = Duration::from_millis(50);

/// Shortest simulated latency.
pub const MIN_LATENCY: Duration = Duration::from_secs(1);

/// Longest simulated latency.
pub const MAX_LATENCY: Duration = Duration::from_secs(5);

/// Simulated vendor latency for a script, clamped to `[1 s, 5 s]`.
pub fn simulated_latency(text: &str) -> Duration {
    let chars = u32::try_from(text_length(text)).unwrap_or(u32::MAX);
    LATENCY_PER_CHAR
        .checked_mul(chars)
        .unwrap_or(MAX_LATENCY)
        .clamp(MIN_LATENCY, MAX_LATENCY)
}

/// Audio returned by a speech vendor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorAudio {
    pub bytes: Vec<u8>,
    /// MIME type, e.g. `audio/mpeg`.
    pub mime_type: String,
}

/// A text-to-speech provider.
#[async_trait]
pub trait SpeechVendor: Send + Sync {
    /// Synthesizes `script` with the given voice.
    async fn synthesize(&self, script: &str, voice_id: &str) -> SynthResult<VendorAudio>;

    /// Provider name for logs.
    fn name(&self) -> &str;
}

/// A voiceover request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceRequest {
    pub title: String,
    pub script: String,
    /// Voice to use; the configured default when `None`.
    pub voice_id: Option<String>,
}

impl VoiceRequest {
    pub fn new(title: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            script: script.into(),
            voice_id: None,
        }
    }

    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = Some(voice_id.into());
        self
    }
}

/// Where a voiceover's audio came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceSource {
    Vendor,
    Synthetic,
    Fallback,
}

impl From<AssetOrigin> for VoiceSource {
    fn from(origin: AssetOrigin) -> Self {
        match origin {
            AssetOrigin::Synthesized => VoiceSource::Synthetic,
            AssetOrigin::Fallback => VoiceSource::Fallback,
        }
    }
}

/// A finished voiceover.
#[derive(Debug, Clone)]
pub struct Voiceover {
    pub title: String,
    pub script: String,
    pub voice_id: String,
    pub source: VoiceSource,
    pub mime_type: String,
    pub audio: Vec<u8>,
    /// BLAKE3 of the PCM payload; `None` for non-WAV vendor audio.
    pub pcm_hash: Option<String>,
    /// Known for WAV audio only.
    pub duration_seconds: Option<f64>,
}

/// Serializable description of a voiceover, without the audio bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceoverMetadata {
    pub title: String,
    pub script: String,
    pub voice_id: String,
    pub source: VoiceSource,
    pub mime_type: String,
    pub byte_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

impl Voiceover {
    fn from_asset(request: VoiceRequest, voice_id: String, asset: EncodedAudioAsset) -> Self {
        Self {
            title: request.title,
            script: request.script,
            voice_id,
            source: asset.origin().into(),
            mime_type: WAV_MIME_TYPE.to_string(),
            pcm_hash: Some(asset.pcm_hash().to_string()),
            duration_seconds: Some(asset.duration_seconds()),
            audio: asset.into_bytes(),
        }
    }

    fn from_vendor(request: VoiceRequest, voice_id: String, audio: VendorAudio) -> Self {
        let is_wav = audio.mime_type == WAV_MIME_TYPE;
        let (pcm_hash, duration_seconds) = if is_wav {
            (
                compute_pcm_hash(&audio.bytes),
                WavHeader::parse(&audio.bytes)
                    .ok()
                    .map(|h| h.duration_seconds()),
            )
        } else {
            (None, None)
        };
        Self {
            title: request.title,
            script: request.script,
            voice_id,
            source: VoiceSource::Vendor,
            mime_type: audio.mime_type,
            audio: audio.bytes,
            pcm_hash,
            duration_seconds,
        }
    }

    /// `data:` URL for a playback component.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.audio))
    }

    pub fn metadata(&self) -> VoiceoverMetadata {
        VoiceoverMetadata {
            title: self.title.clone(),
            script: self.script.clone(),
            voice_id: self.voice_id.clone(),
            source: self.source,
            mime_type: self.mime_type.clone(),
            byte_length: self.audio.len(),
            pcm_hash: self.pcm_hash.clone(),
            duration_seconds: self.duration_seconds,
        }
    }
}

/// Generates voiceovers.
pub struct VoiceService {
    config: CopilotConfig,
    vendor: Option<Arc<dyn SpeechVendor>>,
}

impl VoiceService {
    /// Creates a service with no vendor attached.
    pub fn new(config: CopilotConfig) -> Self {
        Self {
            config,
            vendor: None,
        }
    }

    /// Attaches a live vendor. It is only used when `voice.vendor_enabled` is set.
    pub fn with_vendor(mut self, vendor: Arc<dyn SpeechVendor>) -> Self {
        self.vendor = Some(vendor);
        self
    }

    pub fn config(&self) -> &CopilotConfig {
        &self.config
    }

    /// Whether requests will try the live vendor first.
    pub fn vendor_available(&self) -> bool {
        self.config.voice.vendor_enabled && self.vendor.is_some()
    }

    /// Generates a voiceover. Never fails: vendor errors fall through to
    /// the synthetic path, which is itself total.
    pub async fn generate(&self, request: VoiceRequest) -> Voiceover {
        let voice_id = self.resolve_voice(&request);

        if let Some(vendor) = self.live_vendor() {
            match try_vendor(vendor, &request.script, &voice_id).await {
                Ok(audio) => {
                    info!(vendor = vendor.name(), bytes = audio.bytes.len(), "vendor voiceover ready");
                    return Voiceover::from_vendor(request, voice_id, audio);
                }
                Err(err) => {
                    warn!(
                        vendor = vendor.name(),
                        code = err.code(),
                        error = %err,
                        "vendor synthesis failed, using placeholder audio"
                    );
                }
            }
        }

        if self.config.voice.simulate_latency {
            let delay = simulated_latency(&request.script);
            debug!(?delay, "simulating vendor latency");
            tokio::time::sleep(delay).await;
        }

        self.generate_placeholder(request)
    }

    /// Generates placeholder audio immediately, with no vendor call or delay.
    pub fn generate_placeholder(&self, request: VoiceRequest) -> Voiceover {
        let voice_id = self.resolve_voice(&request);
        let asset = synthesize_placeholder_audio(&request.script, self.config.audio.sample_rate);
        Voiceover::from_asset(request, voice_id, asset)
    }

    fn live_vendor(&self) -> Option<&dyn SpeechVendor> {
        if !self.config.voice.vendor_enabled {
            return None;
        }
        self.vendor.as_deref()
    }

    fn resolve_voice(&self, request: &VoiceRequest) -> String {
        request
            .voice_id
            .clone()
            .unwrap_or_else(|| self.config.voice.default_voice_id.clone())
    }
}

async fn try_vendor(
    vendor: &dyn SpeechVendor,
    script: &str,
    voice_id: &str,
) -> SynthResult<VendorAudio> {
    let audio = vendor.synthesize(script, voice_id).await?;
    if audio.bytes.is_empty() {
        return Err(SynthesisError::vendor("empty audio response"));
    }
    Ok(audio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::fallback::FALLBACK_ASSET_LEN;

    struct StaticVendor {
        response: SynthResult<VendorAudio>,
        calls: AtomicUsize,
    }

    impl StaticVendor {
        fn ok(bytes: &[u8], mime_type: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(VendorAudio {
                    bytes: bytes.to_vec(),
                    mime_type: mime_type.to_string(),
                }),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                response: Err(SynthesisError::vendor("401 unauthorized")),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl SpeechVendor for StaticVendor {
        async fn synthesize(&self, _script: &str, _voice_id: &str) -> SynthResult<VendorAudio> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(audio) => Ok(audio.clone()),
                Err(err) => Err(SynthesisError::vendor(err.to_string())),
            }
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    fn config(vendor_enabled: bool, simulate_latency: bool) -> CopilotConfig {
        let mut config = CopilotConfig::default();
        config.voice.vendor_enabled = vendor_enabled;
        config.voice.simulate_latency = simulate_latency;
        config
    }

    #[test]
    fn test_latency_bounds() {
        assert_eq!(simulated_latency(""), Duration::from_secs(1));
        assert_eq!(simulated_latency(&"a".repeat(20)), Duration::from_secs(1));
        assert_eq!(simulated_latency(&"a".repeat(50)), Duration::from_millis(2500));
        assert_eq!(simulated_latency(&"a".repeat(100)), Duration::from_secs(5));
        assert_eq!(simulated_latency(&"a".repeat(100_000)), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_synthetic_path_waits_simulated_latency() {
        let service = VoiceService::new(config(false, true));
        let start = tokio::time::Instant::now();

        let voiceover = service
            .generate(VoiceRequest::new("Intro", "a".repeat(60)))
            .await;

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(3), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(3100), "{elapsed:?}");
        assert_eq!(voiceover.source, VoiceSource::Synthetic);
        assert_eq!(voiceover.mime_type, "audio/wav");
        assert_eq!(voiceover.voice_id, "placeholder");
        assert_eq!(voiceover.duration_seconds, Some(6.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_can_be_disabled() {
        let service = VoiceService::new(config(false, false));
        let start = tokio::time::Instant::now();
        service.generate(VoiceRequest::new("t", "hi")).await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_vendor_used_when_enabled() {
        let vendor = StaticVendor::ok(b"ID3fake-mp3", "audio/mpeg");
        let service = VoiceService::new(config(true, false)).with_vendor(vendor.clone());
        assert!(service.vendor_available());

        let voiceover = service
            .generate(VoiceRequest::new("t", "script").with_voice("rachel"))
            .await;

        assert_eq!(vendor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(voiceover.source, VoiceSource::Vendor);
        assert_eq!(voiceover.voice_id, "rachel");
        assert_eq!(voiceover.audio, b"ID3fake-mp3");
        assert_eq!(voiceover.pcm_hash, None);
        assert!(voiceover.to_data_url().starts_with("data:audio/mpeg;base64,"));
    }

    #[tokio::test]
    async fn test_vendor_wav_is_inspected() {
        let wav = synthesize_placeholder_audio("vendor", 22050);
        let vendor = StaticVendor::ok(wav.bytes(), "audio/wav");
        let service = VoiceService::new(config(true, false)).with_vendor(vendor);

        let voiceover = service.generate(VoiceRequest::new("t", "s")).await;
        assert_eq!(voiceover.pcm_hash.as_deref(), Some(wav.pcm_hash()));
        assert_eq!(voiceover.duration_seconds, Some(2.0));
    }

    #[tokio::test]
    async fn test_enabled_flag_without_vendor_uses_placeholder() {
        let service = VoiceService::new(config(true, false));
        assert!(!service.vendor_available());

        let voiceover = service.generate(VoiceRequest::new("t", "Hello world")).await;
        assert_eq!(voiceover.source, VoiceSource::Synthetic);
        assert_eq!(voiceover.audio.len(), 176444);
    }

    #[tokio::test]
    async fn test_vendor_ignored_when_disabled() {
        let vendor = StaticVendor::ok(b"mp3", "audio/mpeg");
        let service = VoiceService::new(config(false, false)).with_vendor(vendor.clone());
        assert!(!service.vendor_available());

        let voiceover = service.generate(VoiceRequest::new("t", "s")).await;
        assert_eq!(vendor.calls.load(Ordering::SeqCst), 0);
        assert_eq!(voiceover.source, VoiceSource::Synthetic);
    }

    #[tokio::test]
    async fn test_vendor_failure_falls_back_to_placeholder() {
        let vendor = StaticVendor::failing();
        let service = VoiceService::new(config(true, false)).with_vendor(vendor.clone());

        let voiceover = service.generate(VoiceRequest::new("t", "Hello world")).await;
        assert_eq!(vendor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(voiceover.source, VoiceSource::Synthetic);
        assert_eq!(voiceover.audio.len(), 176444);
    }

    #[tokio::test]
    async fn test_empty_vendor_audio_falls_back() {
        let vendor = StaticVendor::ok(b"", "audio/mpeg");
        let service = VoiceService::new(config(true, false)).with_vendor(vendor);

        let voiceover = service.generate(VoiceRequest::new("t", "s")).await;
        assert_eq!(voiceover.source, VoiceSource::Synthetic);
    }

    #[test]
    fn test_invalid_rate_yields_fallback_source() {
        let mut cfg = config(false, false);
        cfg.audio.sample_rate = 0;
        let service = VoiceService::new(cfg);

        let voiceover = service.generate_placeholder(VoiceRequest::new("t", "s"));
        assert_eq!(voiceover.source, VoiceSource::Fallback);
        assert_eq!(voiceover.audio.len(), FALLBACK_ASSET_LEN);
    }

    #[test]
    fn test_metadata_serializes_without_audio() {
        let service = VoiceService::new(config(false, false));
        let voiceover = service.generate_placeholder(VoiceRequest::new("Intro", "Hello world"));
        let json = serde_json::to_value(voiceover.metadata()).unwrap();

        assert_eq!(json["title"], "Intro");
        assert_eq!(json["source"], "synthetic");
        assert_eq!(json["byte_length"], 176444);
        assert_eq!(json["duration_seconds"], 2.0);
        assert!(json.get("audio").is_none());
    }
}
