//! # Topics Command
//!
//! File: cli/src/commands/topics.rs
//!
//! Prints the matcher's rule table in evaluation order, one rule per line.
//!
use crate::assistant::knowledge::FALLBACK_ANSWER;
use crate::assistant::matcher;
use crate::core::error::Result;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct TopicsArgs {
    /// Also print each topic's canned answer.
    #[arg(long)]
    pub answers: bool,
}

pub async fn handle_topics(args: TopicsArgs) -> Result<()> {
    for (position, rule) in matcher::rules().iter().enumerate() {
        println!(
            "{:>2}. {:<13} {}",
            position + 1,
            rule.topic.key(),
            rule.triggers
                .iter()
                .map(|t| format!("\"{}\"", t))
                .collect::<Vec<_>>()
                .join(", ")
        );
        if args.answers {
            println!("    {}", rule.topic.answer());
        }
    }
    println!("{:>2}. fallback", matcher::rules().len() + 1);
    if args.answers {
        println!("    {}", FALLBACK_ANSWER);
    }
    Ok(())
}
