//! Synth command implementation
//!
//! Generates a voiceover for a script and writes it as a WAV file. No vendor
//! client is wired into the CLI, so output always comes from the placeholder
//! pipeline.

use anyhow::Result;
use colored::Colorize;
use copilot_audio::{CopilotConfig, VoiceRequest, VoiceService, VoiceSource, Voiceover};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

use super::json_output::{error_codes, JsonError, SynthOutput, SynthResultJson};

/// Output path used when `--out` is not given.
pub const DEFAULT_OUTPUT: &str = "voiceover.wav";

/// Options for the synth command.
#[derive(Debug, Clone, Default)]
pub struct SynthOptions {
    /// Script text given inline
    pub text: Option<String>,
    /// File to read the script from
    pub script_file: Option<PathBuf>,
    pub title: Option<String>,
    pub voice: Option<String>,
    /// Overrides `audio.sample_rate`
    pub sample_rate: Option<u32>,
    /// JSON config file
    pub config: Option<PathBuf>,
    pub out: Option<PathBuf>,
    /// Skip the simulated vendor latency
    pub no_latency: bool,
    /// Include a `data:` URL in the output
    pub data_url: bool,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct SynthReport {
    pub output: PathBuf,
    pub voiceover: Voiceover,
    pub elapsed_ms: u64,
}

/// Run the synth command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(options: &SynthOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(options)
    } else {
        run_human(options)
    }
}

fn run_human(options: &SynthOptions) -> Result<ExitCode> {
    let report = execute(options).map_err(|e| anyhow::anyhow!("{}", e.message))?;
    let voiceover = &report.voiceover;

    let source = match voiceover.source {
        VoiceSource::Vendor => "vendor".green(),
        VoiceSource::Synthetic => "placeholder".yellow(),
        VoiceSource::Fallback => "fallback tone".red(),
    };

    println!("{} {}", "Voiceover:".cyan().bold(), voiceover.title);
    println!("  {} {}", "Source:".dimmed(), source);
    println!("  {} {}", "Voice:".dimmed(), voiceover.voice_id);
    if let Some(duration) = voiceover.duration_seconds {
        println!("  {} {:.2}s", "Duration:".dimmed(), duration);
    }
    println!("  {} {} bytes", "Size:".dimmed(), voiceover.audio.len());
    if let Some(hash) = &voiceover.pcm_hash {
        println!("  {} {}", "PCM hash:".dimmed(), &hash[..16]);
    }
    println!(
        "\n{} {} ({}ms)",
        "Wrote".green().bold(),
        report.output.display(),
        report.elapsed_ms
    );
    if options.data_url {
        println!("{}", voiceover.to_data_url());
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(options: &SynthOptions) -> Result<ExitCode> {
    let (output, code) = match execute(options) {
        Ok(report) => {
            let data_url = options.data_url.then(|| report.voiceover.to_data_url());
            let result = SynthResultJson {
                output: Some(report.output.display().to_string()),
                voiceover: report.voiceover.metadata(),
                data_url,
                duration_ms: report.elapsed_ms,
            };
            (SynthOutput::success(result), ExitCode::SUCCESS)
        }
        Err(err) => (SynthOutput::failure(vec![err]), ExitCode::from(1)),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Runs the command without printing anything.
pub fn execute(options: &SynthOptions) -> Result<SynthReport, JsonError> {
    let start = Instant::now();

    let script = load_script(options)?;
    let config = load_config(options)?;
    let service = VoiceService::new(config);

    let title = options.title.clone().unwrap_or_else(|| default_title(&script));
    let mut request = VoiceRequest::new(title, script);
    if let Some(voice) = &options.voice {
        request = request.with_voice(voice.clone());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| JsonError::new(error_codes::RUNTIME, e.to_string()))?;
    let voiceover = runtime.block_on(service.generate(request));

    let output = options
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    write_audio(&output, &voiceover.audio)?;

    info!(
        output = %output.display(),
        source = ?voiceover.source,
        bytes = voiceover.audio.len(),
        "voiceover written"
    );

    Ok(SynthReport {
        output,
        voiceover,
        elapsed_ms: start.elapsed().as_millis() as u64,
    })
}

fn load_script(options: &SynthOptions) -> Result<String, JsonError> {
    match (&options.text, &options.script_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => fs::read_to_string(path).map_err(|e| {
            JsonError::new(
                error_codes::FILE_READ,
                format!("Failed to read script file: {}", e),
            )
            .with_file(path.display().to_string())
        }),
        (None, None) => Err(JsonError::new(
            error_codes::MISSING_SCRIPT,
            "either --text or --script-file is required",
        )),
    }
}

fn load_config(options: &SynthOptions) -> Result<CopilotConfig, JsonError> {
    let mut config = match &options.config {
        Some(path) => CopilotConfig::from_json_file(path).map_err(|e| {
            JsonError::new(error_codes::CONFIG, format!("Failed to load config: {}", e))
                .with_file(path.display().to_string())
        })?,
        None => CopilotConfig::default(),
    };

    if let Some(rate) = options.sample_rate {
        config.audio.sample_rate = rate;
    }
    if options.no_latency {
        config.voice.simulate_latency = false;
    }
    config.validate().map_err(|e| JsonError::from(&e))?;

    Ok(config)
}

fn write_audio(path: &Path, bytes: &[u8]) -> Result<(), JsonError> {
    let write_err = |e: std::io::Error| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("Failed to write audio: {}", e),
        )
        .with_file(path.display().to_string())
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, bytes).map_err(write_err)
}

/// First few words of the script, or "Untitled".
fn default_title(script: &str) -> String {
    let words: Vec<&str> = script.split_whitespace().take(6).collect();
    if words.is_empty() {
        "Untitled".to_string()
    } else {
        words.join(" ")
    }
}
