#![no_main]

use copilot_audio::{synthesize_placeholder_audio, CopilotConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = CopilotConfig::from_json_str(text) {
        // Validated configs must always encode.
        let asset = synthesize_placeholder_audio("fuzz", config.audio.sample_rate);
        assert_eq!(asset.len(), 44 + asset.frame_count() * 2);
    }
});
