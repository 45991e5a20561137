//! Deterministic WAV encoding and inspection.
//!
//! Writes mono 16-bit PCM WAV files with a fixed 44-byte header and no
//! timestamps or optional chunks, so identical samples always produce
//! identical bytes. The BLAKE3 hash of the PCM payload identifies the audio
//! content independent of the header.

mod asset;
mod format;
mod header;
mod pcm;
mod writer;


pub use asset::{encode_buffer, AssetOrigin, EncodedAudioAsset, WAV_MIME_TYPE};
pub use format::{WavFormat, HEADER_SIZE, PCM_FORMAT_TAG};
pub use header::WavHeader;
pub use pcm::{compute_pcm_hash, decode_pcm16, extract_pcm_data, hash_pcm};
pub use writer::{quantize_sample, samples_to_pcm16, write_wav, write_wav_to_vec, PCM16_SCALE};
