//! # Elevated Assistant HTTP Service
//!
//! File: cli/src/commands/srv/mod.rs
//!
//! ## Overview
//!
//! `elevated srv` exposes the assistant, the onboarding email renderer and
//! the toolkit demos as a JSON API, optionally next to a built copy of the
//! site. Configurable options:
//! - CORS (permissive unless `--no-cors`)
//! - Port binding (with automatic fallback if the port is in use)
//! - Host interface binding
//! - A site directory for non-API paths
//!
//! ## Architecture
//!
//! - `config.rs`: Argument parsing and merging with the `[server]` section
//! - `routes.rs`: API handlers and error-to-status mapping
//! - `server_logic.rs`: Listener, middleware and shutdown handling
//!
//! ```bash
//! elevated srv
//! elevated srv --port 9000 --host 0.0.0.0 --dir ./dist
//! elevated srv --no-cors
//! ```
//!
use crate::core::config as app_config;
use crate::core::error::Result;
use crate::notify::Notifier;
use std::sync::Arc;
use tracing::info;

pub use config::SrvArgs;

/// Handles argument parsing and merging for the server.
pub mod config;
/// API routes and their shared state.
pub mod routes;
/// The Axum server itself.
pub mod server_logic;

/// # Handle Server Command (`handle_srv`)
///
/// Loads the application configuration, builds the shared handler state and
/// serves until shutdown.
pub async fn handle_srv(args: SrvArgs) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let app_cfg = app_config::load_config()?;
    let server_cfg = config::load_and_merge_config(args, &app_cfg.server).await?;
    info!("Effective server config: {:?}", server_cfg);

    let state = Arc::new(routes::AppState {
        notifier: Notifier::new(&app_cfg.notify)?,
        toolkit: app_cfg.toolkit,
    });

    server_logic::run_server(server_cfg, state).await
}
