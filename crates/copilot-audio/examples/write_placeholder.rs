//! Writes a placeholder voiceover for a script given on the command line.
//!
//! ```text
//! cargo run -p copilot-audio --example write_placeholder -- "Welcome back to the channel" out.wav
//! ```

use copilot_audio::{synthesize_placeholder_audio, DEFAULT_SAMPLE_RATE};

fn main() -> std::io::Result<()> {
    let mut args = std::env::args().skip(1);
    let script = args.next().unwrap_or_default();
    let path = args.next().unwrap_or_else(|| "placeholder.wav".to_string());

    let asset = synthesize_placeholder_audio(&script, DEFAULT_SAMPLE_RATE);
    std::fs::write(&path, asset.bytes())?;

    println!(
        "{}: {:.2}s, {} bytes, pcm {}",
        path,
        asset.duration_seconds(),
        asset.len(),
        &asset.pcm_hash()[..16]
    );
    Ok(())
}
