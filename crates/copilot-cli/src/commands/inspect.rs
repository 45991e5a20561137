//! Inspect command implementation
//!
//! Reads a WAV file, decodes its header and reports whether it is a
//! well-formed mono 16-bit PCM asset.

use anyhow::Result;
use colored::Colorize;
use copilot_audio::wav::{compute_pcm_hash, decode_pcm16, extract_pcm_data};
use copilot_audio::WavHeader;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, InspectOutput, InspectResult, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the file is a consistent WAV, 1 otherwise
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

fn run_human(input: &str) -> Result<ExitCode> {
    let result = inspect_file(Path::new(input)).map_err(|e| anyhow::anyhow!("{}", e.message))?;
    let header = &result.header;

    println!("{} {}", "Inspecting:".cyan().bold(), input);
    println!("  {} {} bytes", "File size:".dimmed(), result.file_size);
    println!("  {} {} Hz", "Sample rate:".dimmed(), header.sample_rate);
    println!("  {} {}", "Channels:".dimmed(), header.channels);
    println!("  {} {}", "Bits/sample:".dimmed(), header.bits_per_sample);
    println!("  {} {}", "Byte rate:".dimmed(), header.byte_rate);
    println!("  {} {}", "Block align:".dimmed(), header.block_align);
    println!("  {} {} bytes", "Data size:".dimmed(), header.data_size);
    println!("  {} {}", "Frames:".dimmed(), result.frame_count);
    println!("  {} {:.3}s", "Duration:".dimmed(), result.duration_seconds);
    if let Some((min, max)) = result.sample_range {
        println!("  {} {}..{}", "Sample range:".dimmed(), min, max);
    }
    println!("  {} {}", "File hash:".dimmed(), &result.file_hash[..16]);
    if let Some(hash) = &result.pcm_hash {
        println!("  {} {}", "PCM hash:".dimmed(), &hash[..16]);
    }

    if result.consistent {
        println!("\n{}", "Header is consistent".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{}",
            "Header fields disagree with each other or the file length"
                .red()
                .bold()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(input: &str) -> Result<ExitCode> {
    let (output, code) = match inspect_file(Path::new(input)) {
        Ok(result) => {
            let code = if result.consistent {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            };
            (InspectOutput::success(result), code)
        }
        Err(err) => (InspectOutput::failure(vec![err]), ExitCode::from(1)),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Reads and inspects a WAV file.
pub fn inspect_file(path: &Path) -> Result<InspectResult, JsonError> {
    let data = fs::read(path).map_err(|e| {
        JsonError::new(error_codes::FILE_READ, format!("Failed to read file: {}", e))
            .with_file(path.display().to_string())
    })?;
    inspect_bytes(&path.display().to_string(), &data)
}

/// Inspects WAV bytes already in memory.
pub fn inspect_bytes(input: &str, data: &[u8]) -> Result<InspectResult, JsonError> {
    let header = WavHeader::parse(data).map_err(|e| JsonError::from(&e).with_file(input))?;

    let sample_range = match extract_pcm_data(data) {
        Some(pcm) if header.bits_per_sample == 16 => {
            let samples = decode_pcm16(pcm);
            let min = samples.iter().copied().min();
            let max = samples.iter().copied().max();
            min.zip(max)
        }
        _ => None,
    };

    Ok(InspectResult {
        input: input.to_string(),
        file_size: data.len(),
        frame_count: header.frame_count(),
        duration_seconds: header.duration_seconds(),
        consistent: header.is_consistent(data.len()),
        file_hash: blake3::hash(data).to_hex().to_string(),
        pcm_hash: compute_pcm_hash(data),
        sample_range,
        header,
    })
}
