//! # Elevated Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Top-level commands of the Elevated CLI. Each module defines its argument
//! struct and an async `handle_*` function that `main.rs` dispatches to.
//!
//! - `ask`: Answer a single question
//! - `chat`: Interactive conversation with the assistant
//! - `notify`: Render an onboarding email
//! - `srv`: HTTP API server
//! - `tools`: Copy writer and cover art demos
//! - `topics`: List the rule table
//!

/// One-shot question answering.
pub mod ask;
/// Interactive chat session on stdin/stdout.
pub mod chat;
/// Onboarding email rendering.
pub mod notify;
/// HTTP service exposing the assistant and tools.
pub mod srv;
/// Marketing copy and cover art generators.
pub mod tools;
/// Rule table listing.
pub mod topics;
