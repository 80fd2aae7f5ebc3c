//! # Notify Command
//!
//! File: cli/src/commands/notify.rs
//!
//! Renders one onboarding email and prints the acknowledgement JSON the
//! notification endpoint would return. Nothing is sent.
//!
//! ```bash
//! elevated notify --email ada@example.com --name Ada --kind welcome
//! elevated notify --email ada@example.com --name Ada --kind tour --show-body
//! ```
//!
use crate::core::config;
use crate::core::error::Result;
use crate::notify::{EmailKind, EmailRequest, Notifier};
use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct NotifyArgs {
    /// Recipient address.
    #[arg(long)]
    pub email: String,

    /// Recipient display name, used in the greeting.
    #[arg(long)]
    pub name: String,

    /// Which email of the onboarding sequence to render.
    #[arg(long, value_enum, default_value_t = EmailKind::Welcome)]
    pub kind: EmailKind,

    /// Print the rendered subject and HTML body after the acknowledgement.
    #[arg(long)]
    pub show_body: bool,
}

pub async fn handle_notify(args: NotifyArgs) -> Result<()> {
    let cfg = config::load_config()?;
    let notifier = Notifier::new(&cfg.notify)?;

    let request = EmailRequest {
        email: args.email,
        name: args.name,
        kind: args.kind.as_str().to_string(),
    };
    let (ack, rendered) = notifier.handle(&request)?;

    let json = serde_json::to_string_pretty(&ack).context("Failed to encode acknowledgement")?;
    println!("{}", json);
    if args.show_body {
        println!("\nSubject: {}\n", rendered.subject);
        println!("{}", rendered.html);
    }
    Ok(())
}
