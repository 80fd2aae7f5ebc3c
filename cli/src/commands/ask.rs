//! # Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! One-shot question: `elevated ask how long does distribution take`.
//! Words are joined with single spaces and passed to the intent matcher.
//!
use crate::assistant::matcher;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use serde_json::json;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question to answer. May be given as several words.
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,

    /// Print `{"topic": ..., "answer": ...}` instead of the plain answer.
    #[arg(long)]
    pub json: bool,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    let question = args.question.join(" ");
    let topic = matcher::classify(&question);
    debug!(?topic, "answering {:?}", question);
    let answer = matcher::find_answer(&question);

    if args.json {
        let payload = json!({ "topic": topic, "answer": answer });
        let rendered =
            serde_json::to_string_pretty(&payload).context("Failed to encode answer as JSON")?;
        println!("{}", rendered);
    } else {
        println!("{}", answer);
    }
    Ok(())
}
