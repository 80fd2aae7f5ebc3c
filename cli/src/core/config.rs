//! # Elevated Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system, handling loading,
//! merging, validation, and access to configuration data. It supports a
//! multi-level approach that combines defaults, user settings, and
//! project-specific overrides.
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.elevated.toml` in current directory or ancestors
//! 2. User-specific `<config dir>/elevated/config.toml`
//! 3. Default values defined in the code
//!
//! Command-line flags are applied on top of the loaded configuration by the
//! individual commands (see `commands::srv::config`).
//!
//! ## Examples
//!
//! ```toml
//! [assistant]
//! name = "Elevated Assistant"
//! typing_delay_ms = 1000
//!
//! [notify]
//! app_url = "https://elevated.example"
//! support_email = "support@elevated.example"
//!
//! [toolkit]
//! copy_delay_ms = 1500
//! cover_art_delay_ms = 2000
//!
//! [server]
//! port = 8080
//! directory = "~/sites/elevated/dist"
//! ```
//!
use crate::core::error::{AppError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    net::IpAddr,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// Name of the project-level configuration file.
pub const PROJECT_CONFIG_FILENAME: &str = ".elevated.toml";

/// Support address printed in fallback answers and email footers.
pub const DEFAULT_SUPPORT_EMAIL: &str = "breonjohnson20x@gmail.com";

/// Effective configuration after defaults, user and project files are layered.
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub notify: NotifyConfig,
    pub toolkit: ToolkitConfig,
    pub server: ServerSection,
}

/// Settings for the chat assistant (`elevated chat`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Display name used as the bot's prompt label.
    pub name: String,
    /// Simulated typing pause before each answer, in milliseconds.
    pub typing_delay_ms: u64,
}

/// Settings for the onboarding email renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    /// Base URL of the web application; dashboard links are built from it.
    pub app_url: String,
    /// Address shown in email footers.
    pub support_email: String,
}

/// Artificial generation delays for the AI toolkit demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolkitConfig {
    pub copy_delay_ms: u64,
    pub cover_art_delay_ms: u64,
}

/// One configuration file as written on disk. Every key is optional so that
/// a value set explicitly (even to the default) can be told apart from a
/// missing one when files are layered.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct ConfigFile {
    pub assistant: AssistantSection,
    pub notify: NotifySection,
    pub toolkit: ToolkitSection,
    pub server: ServerSection,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AssistantSection {
    pub name: Option<String>,
    pub typing_delay_ms: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NotifySection {
    pub app_url: Option<String>,
    pub support_email: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolkitSection {
    pub copy_delay_ms: Option<u64>,
    pub cover_art_delay_ms: Option<u64>,
}

/// Optional `[server]` section. Every field is optional so that CLI flags
/// can tell "not configured" apart from "configured to the default".
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub port: Option<u16>,
    pub host: Option<String>,
    /// Directory with a built site to serve next to the API (can use ~).
    pub directory: Option<String>,
    pub enable_cors: Option<bool>,
}

fn default_assistant_name() -> String {
    "Elevated Assistant".to_string()
}
fn default_typing_delay_ms() -> u64 {
    1000
}
fn default_app_url() -> String {
    std::env::var("APP_URL").unwrap_or_else(|_| "http://localhost:5173".to_string())
}
fn default_support_email() -> String {
    DEFAULT_SUPPORT_EMAIL.to_string()
}
fn default_copy_delay_ms() -> u64 {
    1500
}
fn default_cover_art_delay_ms() -> u64 {
    2000
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            typing_delay_ms: default_typing_delay_ms(),
        }
    }
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            app_url: default_app_url(),
            support_email: default_support_email(),
        }
    }
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            copy_delay_ms: default_copy_delay_ms(),
            cover_art_delay_ms: default_cover_art_delay_ms(),
        }
    }
}

impl From<ConfigFile> for Config {
    /// Fills every key the files left unset with its built-in default.
    fn from(file: ConfigFile) -> Self {
        Self {
            assistant: AssistantConfig {
                name: file.assistant.name.unwrap_or_else(default_assistant_name),
                typing_delay_ms: file
                    .assistant
                    .typing_delay_ms
                    .unwrap_or_else(default_typing_delay_ms),
            },
            notify: NotifyConfig {
                app_url: file.notify.app_url.unwrap_or_else(default_app_url),
                support_email: file
                    .notify
                    .support_email
                    .unwrap_or_else(default_support_email),
            },
            toolkit: ToolkitConfig {
                copy_delay_ms: file
                    .toolkit
                    .copy_delay_ms
                    .unwrap_or_else(default_copy_delay_ms),
                cover_art_delay_ms: file
                    .toolkit
                    .cover_art_delay_ms
                    .unwrap_or_else(default_cover_art_delay_ms),
            },
            server: file.server,
        }
    }
}

impl AssistantConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}

impl ToolkitConfig {
    pub fn copy_delay(&self) -> Duration {
        Duration::from_millis(self.copy_delay_ms)
    }

    pub fn cover_art_delay(&self) -> Duration {
        Duration::from_millis(self.cover_art_delay_ms)
    }

    /// Toolkit settings with every artificial delay removed.
    pub fn instant() -> Self {
        Self {
            copy_delay_ms: 0,
            cover_art_delay_ms: 0,
        }
    }
}

/// Loads, merges, expands and validates the configuration for this invocation.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = Config::from(merge_configs(
        user_config.unwrap_or_default(),
        project_config,
    ));
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Elevated", "elevated") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for
/// `.elevated.toml`. The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Key-wise merge: every key the project file sets wins over the user file,
/// including keys set to their default value.
fn merge_configs(user: ConfigFile, project: Option<ConfigFile>) -> ConfigFile {
    let Some(project) = project else {
        return user;
    };
    ConfigFile {
        assistant: AssistantSection {
            name: project.assistant.name.or(user.assistant.name),
            typing_delay_ms: project
                .assistant
                .typing_delay_ms
                .or(user.assistant.typing_delay_ms),
        },
        notify: NotifySection {
            app_url: project.notify.app_url.or(user.notify.app_url),
            support_email: project.notify.support_email.or(user.notify.support_email),
        },
        toolkit: ToolkitSection {
            copy_delay_ms: project.toolkit.copy_delay_ms.or(user.toolkit.copy_delay_ms),
            cover_art_delay_ms: project
                .toolkit
                .cover_art_delay_ms
                .or(user.toolkit.cover_art_delay_ms),
        },
        server: ServerSection {
            port: project.server.port.or(user.server.port),
            host: project.server.host.or(user.server.host),
            directory: project.server.directory.or(user.server.directory),
            enable_cors: project.server.enable_cors.or(user.server.enable_cors),
        },
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(dir) = config.server.directory.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded server directory: {}", dir);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    let app_url = &config.notify.app_url;
    if !(app_url.starts_with("http://") || app_url.starts_with("https://")) {
        return Err(anyhow!(AppError::Config(format!(
            "notify.app_url '{}' must start with http:// or https://",
            app_url
        ))));
    }
    let email = config.notify.support_email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(anyhow!(AppError::Config(format!(
            "notify.support_email '{}' is not an email address",
            config.notify.support_email
        ))));
    }
    if let Some(host) = &config.server.host {
        host.parse::<IpAddr>().map_err(|e| {
            anyhow!(AppError::Config(format!(
                "server.host '{}' is not an IP address: {}",
                host, e
            )))
        })?;
    }
    if config.assistant.name.trim().is_empty() {
        return Err(anyhow!(AppError::Config(
            "assistant.name must not be empty".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}
