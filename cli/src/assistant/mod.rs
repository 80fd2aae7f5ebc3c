//! # Chat Assistant
//!
//! File: cli/src/assistant/mod.rs
//!
//! ## Overview
//!
//! The canned-answer chat assistant:
//! - `knowledge`: the topic table (topic keys, answer text, greeting, fallback)
//! - `matcher`: ordered substring rules mapping a question to one answer
//! - `session`: a conversation transcript with a simulated typing pause
//!
//! ## Usage
//!
//! ```rust
//! use crate::assistant::{matcher, Session};
//!
//! let answer = matcher::find_answer("How long does distribution take?");
//!
//! let mut session = Session::new("Elevated Assistant", Duration::from_secs(1));
//! if let Some(reply) = session.send("What's your pricing?").await {
//!     println!("{}", reply.text);
//! }
//! ```
//!
pub mod knowledge;
pub mod matcher;
pub mod session;

pub use knowledge::Topic;
pub use session::Session;
