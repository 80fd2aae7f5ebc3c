//! # Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Interactive conversation with the assistant on stdin/stdout. Each line is
//! one user turn; blank lines are ignored the same way the chat widget ignores
//! an empty send. The session shows a typing indicator for the configured
//! delay before every answer. `bye`, `exit` or `quit` (or end of input) ends
//! the conversation.
//!
//! ```bash
//! elevated chat
//! elevated chat --no-delay < questions.txt
//! ```
//!
use crate::assistant::Session;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Answer immediately instead of pausing for the typing delay.
    #[arg(long)]
    pub no_delay: bool,

    /// Override the configured typing delay, in milliseconds.
    #[arg(long, value_name = "MS", conflicts_with = "no_delay")]
    pub delay_ms: Option<u64>,
}

const EXIT_WORDS: [&str; 3] = ["bye", "exit", "quit"];

fn prompt(label: &str) -> Result<()> {
    print!("{}: ", label);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")
}

pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let delay = if args.no_delay {
        Duration::ZERO
    } else {
        args.delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| cfg.assistant.typing_delay())
    };
    info!("Starting chat session (typing delay {:?})", delay);

    let mut session = Session::new(cfg.assistant.name.clone(), delay);
    let name = session.assistant_name().to_string();
    for message in session.transcript() {
        println!("{}: {}", name, message.text);
    }
    println!("(type 'bye' to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt("You")?;
        let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        else {
            println!();
            break;
        };

        if EXIT_WORDS
            .iter()
            .any(|w| line.trim().eq_ignore_ascii_case(w))
        {
            println!("{}: Goodbye!", name);
            break;
        }

        let reply = if delay.is_zero() {
            match session.send(&line).await {
                Some(reply) => reply,
                None => continue,
            }
        } else {
            let Some(pending) = session.begin(&line) else {
                continue;
            };
            println!("{} is typing...", name);
            session.complete(pending.wait().await)
        };
        println!("{}: {}", name, reply.text);
    }

    info!(
        "Chat session ended after {} messages",
        session.transcript().len()
    );
    Ok(())
}
