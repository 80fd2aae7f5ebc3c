//! # Conversation Session
//!
//! File: cli/src/assistant/session.rs
//!
//! ## Overview
//!
//! A `Session` owns one conversation: the transcript (message ids, ordering,
//! timestamps) and the "assistant is typing" flag. Each user turn calls the
//! intent matcher once and shows the answer after a simulated typing pause.
//!
//! A turn has three steps so that callers can render the typing state:
//! 1. `begin` records the user message, raises the typing flag, and returns a
//!    `PendingReply` holding the answer.
//! 2. `PendingReply::wait` sleeps for the typing delay.
//! 3. `complete` appends the answer as a bot message and clears the flag.
//!
//! `send` runs all three. Dropping a pending reply discards the answer; the
//! user message stays in the transcript and nothing else is undone, since the
//! matcher has no side effects. The typing flag stays raised until the next
//! `begin`.
//!
use super::knowledge::GREETING;
use super::matcher;
use crate::common::pacing;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One line of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// An answer chosen for a user turn but not yet shown.
#[derive(Debug)]
#[must_use = "a pending reply does nothing until it is waited on and completed"]
pub struct PendingReply {
    answer: &'static str,
    delay: Duration,
}

/// An answer whose typing pause has elapsed.
#[derive(Debug)]
pub struct ReadyReply {
    answer: &'static str,
}

impl PendingReply {
    pub async fn wait(self) -> ReadyReply {
        let answer = pacing::delayed(self.delay, self.answer).await;
        ReadyReply { answer }
    }
}

#[derive(Debug)]
pub struct Session {
    assistant_name: String,
    typing_delay: Duration,
    messages: Vec<Message>,
    next_id: u64,
    typing: bool,
}

impl Session {
    /// Starts a conversation seeded with the greeting.
    pub fn new(assistant_name: impl Into<String>, typing_delay: Duration) -> Self {
        let mut session = Self {
            assistant_name: assistant_name.into(),
            typing_delay,
            messages: Vec::new(),
            next_id: 1,
            typing: false,
        };
        session.push(GREETING.to_string(), Sender::Bot);
        session
    }

    pub fn assistant_name(&self) -> &str {
        &self.assistant_name
    }

    pub fn transcript(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Records a user turn. Blank input (empty or whitespace only) is ignored
    /// and yields `None`; otherwise the raw text is stored untouched.
    ///
    /// Starting a turn first lowers a typing flag left raised by a reply that
    /// was dropped before completion.
    pub fn begin(&mut self, text: &str) -> Option<PendingReply> {
        self.typing = false;
        if text.trim().is_empty() {
            return None;
        }
        self.push(text.to_string(), Sender::User);
        self.typing = true;
        Some(PendingReply {
            answer: matcher::find_answer(text),
            delay: self.typing_delay,
        })
    }

    /// Appends a ready answer as a bot message and lowers the typing flag.
    pub fn complete(&mut self, reply: ReadyReply) -> &Message {
        self.typing = false;
        self.push(reply.answer.to_string(), Sender::Bot)
    }

    /// Runs a whole user turn and returns the bot's reply, or `None` for blank input.
    pub async fn send(&mut self, text: &str) -> Option<&Message> {
        let pending = self.begin(text)?;
        let ready = pending.wait().await;
        Some(self.complete(ready))
    }

    fn push(&mut self, text: String, sender: Sender) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        debug!(id, ?sender, "appending message");
        self.messages.push(Message {
            id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }
}
