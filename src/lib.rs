//! tokcast: token counting and API cost estimation for DeepSeek models
//!
//! Provides a regex-based approximation of DeepSeek V3 token counts that
//! works without the real tokenizer model, a compile-time rate table for
//! the chat and reasoner models in both billing periods, and rendering
//! for human-readable and JSON output. The `tokcast` binary wraps these
//! in a small CLI.
//!
//! Token counts are estimates and may not match what the DeepSeek API
//! bills for.

pub mod cli;
pub mod config;
pub mod estimate;
pub mod input;
pub mod pricing;
pub mod render;
