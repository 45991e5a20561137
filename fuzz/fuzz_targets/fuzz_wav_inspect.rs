#![no_main]

use copilot_audio::wav::{compute_pcm_hash, decode_pcm16, extract_pcm_data};
use copilot_audio::WavHeader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(header) = WavHeader::parse(data) {
        let _ = header.frame_count();
        let _ = header.duration_seconds();
        let _ = header.is_consistent(data.len());
    }
    if let Some(pcm) = extract_pcm_data(data) {
        let _ = decode_pcm16(pcm);
    }
    let _ = compute_pcm_hash(data);
});
