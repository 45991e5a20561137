//! CreatorCopilot CLI - placeholder voiceover generation
//!
//! Generates voiceover audio for scripts and inspects the resulting WAV files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use copilot_cli::commands;
use copilot_cli::commands::synth::SynthOptions;

/// CreatorCopilot - voiceover generation for content creators
#[derive(Parser)]
#[command(name = "copilot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a voiceover WAV for a script
    Synth {
        /// Script text
        #[arg(short, long, conflicts_with = "script_file")]
        text: Option<String>,

        /// Read the script from a file
        #[arg(long)]
        script_file: Option<PathBuf>,

        /// Voiceover title (default: first words of the script)
        #[arg(long)]
        title: Option<String>,

        /// Voice identifier (default: from config)
        #[arg(long)]
        voice: Option<String>,

        /// Output sample rate in Hz (default: from config, 44100)
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Path to a JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output WAV path (default: voiceover.wav)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Skip the simulated vendor latency
        #[arg(long)]
        no_latency: bool,

        /// Also print a data: URL for the audio
        #[arg(long)]
        data_url: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Inspect a WAV file and report its header
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    // Logs go to stderr so `--json` output on stdout stays parseable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("copilot_audio=warn,copilot_cli=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Synth {
            text,
            script_file,
            title,
            voice,
            sample_rate,
            config,
            out,
            no_latency,
            data_url,
            json,
        } => {
            let options = SynthOptions {
                text,
                script_file,
                title,
                voice,
                sample_rate,
                config,
                out,
                no_latency,
                data_url,
            };
            commands::synth::run(&options, json)
        }
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_synth() {
        let cli = Cli::try_parse_from([
            "copilot",
            "synth",
            "--text",
            "Hello world",
            "--out",
            "hello.wav",
            "--sample-rate",
            "48000",
        ])
        .unwrap();
        match cli.command {
            Commands::Synth {
                text,
                out,
                sample_rate,
                json,
                no_latency,
                ..
            } => {
                assert_eq!(text.as_deref(), Some("Hello world"));
                assert_eq!(out, Some(PathBuf::from("hello.wav")));
                assert_eq!(sample_rate, Some(48000));
                assert!(!json);
                assert!(!no_latency);
            }
            _ => panic!("expected synth command"),
        }
    }

    #[test]
    fn test_cli_rejects_text_and_script_file() {
        let err = Cli::try_parse_from([
            "copilot",
            "synth",
            "--text",
            "hi",
            "--script-file",
            "s.txt",
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("cannot be used with"));
    }

    #[test]
    fn test_cli_parses_inspect_with_json() {
        let cli = Cli::try_parse_from(["copilot", "inspect", "--input", "a.wav", "--json"]).unwrap();
        match cli.command {
            Commands::Inspect { input, json } => {
                assert_eq!(input, "a.wav");
                assert!(json);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_requires_input_for_inspect() {
        let err = Cli::try_parse_from(["copilot", "inspect"]).err().unwrap();
        assert!(err.to_string().contains("--input"));
    }
}
