//! # Elevated Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the Elevated Media House assistant CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - `assistant`: Topic table, intent matcher and chat session
//! - `notify`: Onboarding email rendering
//! - `toolkit`: Copy writer and cover art demos
//! - `commands`: One module per top-level command
//! - `core`: Errors, configuration, templating
//! - `common`: Shared helpers
//!
//! ```bash
//! elevated ask "how long does distribution take?"
//! elevated -v chat
//! elevated srv --port 9000
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod assistant;
mod commands;
mod common;
mod core;
mod notify;
mod toolkit;

#[derive(Parser, Debug)]
#[command(
    name = "elevated",
    about = "🎵 Elevated Media House assistant",
    long_about = "Answers visitor questions about Elevated Media House distribution,\n\
                  renders onboarding emails and runs the AI toolkit demos.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Answer a single question.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Chat with the assistant interactively.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// List the topics and their trigger phrases.
    Topics(commands::topics::TopicsArgs),
    /// Render an onboarding email without sending it.
    Notify(commands::notify::NotifyArgs),
    /// Run the AI toolkit demos.
    #[command(alias = "t")]
    Tools(commands::tools::ToolsArgs),
    /// Serve the assistant API over HTTP.
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Topics(args) => commands::topics::handle_topics(args).await,
        Commands::Notify(args) => commands::notify::handle_notify(args).await,
        Commands::Tools(args) => commands::tools::handle_tools(args).await,
        Commands::Srv(args) => commands::srv::handle_srv(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use clap::CommandFactory;
    use predicates::prelude::*;

    fn elevated_cmd() -> Command {
        Command::cargo_bin("elevated").expect("Failed to find elevated binary for testing")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_main_help_flag() {
        elevated_cmd().arg("--help").assert().success();
    }

    #[test]
    fn test_main_version_flag() {
        elevated_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
