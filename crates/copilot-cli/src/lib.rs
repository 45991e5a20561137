//! CreatorCopilot CLI library.
//!
//! Command implementations for the `copilot` binary: generating placeholder
//! voiceovers and inspecting WAV files.

pub mod commands;
