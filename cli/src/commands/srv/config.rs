//! # Elevated HTTP Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//!
//! ## Overview
//!
//! Combines the server settings from:
//! 1. Command-line arguments (highest priority, whenever a flag is given)
//! 2. The `[server]` section of the loaded configuration (`.elevated.toml`)
//! 3. Default values (lowest priority)
//!
//! A site directory, when one is configured, is resolved to an absolute,
//! canonical path and must exist.
//!
//! ```toml
//! [server]
//! port = 9000
//! host = "0.0.0.0"
//! directory = "dist"
//! enable_cors = false
//! ```
//!
use crate::core::config::ServerSection;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};
use std::{env, path::PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_PORT: u16 = 8000;

/// # Server Command Arguments (`SrvArgs`)
#[derive(Parser, Debug)]
pub struct SrvArgs {
    /// Directory with a built site to serve next to the API.
    /// Requests that match no API route are looked up in this directory.
    #[arg(long, short)]
    pub dir: Option<PathBuf>,

    /// Network port to listen on [default: 8000]. If it is taken, the next
    /// free port is used.
    #[arg(long, short)]
    pub port: Option<u16>,

    /// IP address to bind to [default: 127.0.0.1]. `0.0.0.0` accepts
    /// connections from the network.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Do not send CORS headers. CORS is permissive by default.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    /// Resolved site directory, if any.
    pub directory: Option<PathBuf>,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            directory: None,
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Makes `directory` absolute and canonical, failing if it is missing or not a directory.
    async fn resolve_directory(&mut self) -> Result<()> {
        let Some(dir_path) = self.directory.as_ref() else {
            return Ok(());
        };

        let absolute_path = if dir_path.is_absolute() {
            dir_path.clone()
        } else {
            env::current_dir()
                .context("Failed to get current working directory")?
                .join(dir_path)
        };

        let canonical_path = tokio::fs::canonicalize(&absolute_path)
            .await
            .with_context(|| {
                format!(
                    "Directory '{}' could not be found or accessed",
                    absolute_path.display()
                )
            })?;
        let metadata = tokio::fs::metadata(&canonical_path)
            .await
            .with_context(|| format!("Failed to get metadata for '{}'", canonical_path.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("Path is not a directory: {}", canonical_path.display());
        }

        debug!("Resolved site directory to: {}", canonical_path.display());
        self.directory = Some(canonical_path);
        Ok(())
    }
}

/// # Load and Merge Server Configuration (`load_and_merge_config`)
///
/// Every flag given on the command line wins over the `[server]` section,
/// which in turn wins over the defaults.
pub async fn load_and_merge_config(args: SrvArgs, file: &ServerSection) -> Result<ServerConfig> {
    let defaults = ServerConfig::default();

    let host = match (args.host, &file.host) {
        (Some(ip), _) => ip,
        (None, Some(host)) => match host.parse() {
            Ok(ip) => ip,
            Err(e) => {
                warn!(
                    "Invalid host IP '{}' in config file ({}), using {}",
                    host, e, defaults.host
                );
                defaults.host
            }
        },
        (None, None) => defaults.host,
    };

    let mut effective = ServerConfig {
        port: args.port.or(file.port).unwrap_or(defaults.port),
        host,
        directory: args.dir.or_else(|| file.directory.as_ref().map(PathBuf::from)),
        enable_cors: !args.no_cors && file.enable_cors.unwrap_or(defaults.enable_cors),
    };

    effective.resolve_directory().await?;
    Ok(effective)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::fs;
    use tempfile::TempDir;

    fn args() -> SrvArgs {
        SrvArgs::parse_from(["srv"])
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.directory, None);
        assert!(config.enable_cors);
    }

    #[test]
    fn test_args_parse_as_optional() {
        let args = SrvArgs::parse_from(["srv", "-p", "9000", "--host", "0.0.0.0", "--no-cors"]);
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.host, Some("0.0.0.0".parse().unwrap()));
        assert!(args.no_cors);

        let bare = self::args();
        assert_eq!(bare.port, None);
        assert_eq!(bare.host, None);
        assert_eq!(bare.dir, None);
    }

    #[tokio::test]
    async fn test_args_only() -> Result<()> {
        let config = load_and_merge_config(args(), &ServerSection::default()).await?;
        assert_eq!(config, ServerConfig::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file = ServerSection {
            port: Some(9090),
            host: Some("0.0.0.0".into()),
            directory: Some(temp_dir.path().to_string_lossy().into_owned()),
            enable_cors: Some(false),
        };

        let config = load_and_merge_config(args(), &file).await?;

        assert_eq!(config.port, 9090);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert!(!config.enable_cors);
        assert_eq!(config.directory, Some(fs::canonicalize(temp_dir.path())?));
        Ok(())
    }

    #[tokio::test]
    async fn test_cli_overrides_file() -> Result<()> {
        let file = ServerSection {
            port: Some(9090),
            host: Some("0.0.0.0".into()),
            directory: None,
            enable_cors: Some(true),
        };
        let cli = SrvArgs::parse_from(["srv", "--port", "7000", "--host", "127.0.0.2", "--no-cors"]);

        let config = load_and_merge_config(cli, &file).await?;

        assert_eq!(config.port, 7000);
        assert_eq!(config.host.to_string(), "127.0.0.2");
        assert!(!config.enable_cors);
        Ok(())
    }

    #[tokio::test]
    async fn test_explicit_default_flags_still_override_file() -> Result<()> {
        let file = ServerSection {
            port: Some(9090),
            host: Some("0.0.0.0".into()),
            directory: None,
            enable_cors: None,
        };
        let cli = SrvArgs::parse_from(["srv", "--port", "8000", "--host", "127.0.0.1"]);

        let config = load_and_merge_config(cli, &file).await?;

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        Ok(())
    }

    #[tokio::test]
    async fn test_cli_dir_overrides_file_dir() -> Result<()> {
        let cli_dir = TempDir::new()?;
        let file_dir = TempDir::new()?;
        let file = ServerSection {
            directory: Some(file_dir.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        let cli = SrvArgs::parse_from([
            OsString::from("srv"),
            OsString::from("--dir"),
            cli_dir.path().into(),
        ]);

        let config = load_and_merge_config(cli, &file).await?;

        assert_eq!(config.directory, Some(fs::canonicalize(cli_dir.path())?));
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_file_host_is_ignored() -> Result<()> {
        let file = ServerSection {
            host: Some("nope".into()),
            ..Default::default()
        };
        let config = load_and_merge_config(args(), &file).await?;
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_directory_nonexistent() {
        let mut config = ServerConfig {
            directory: Some(PathBuf::from("/path/that/definitely/does/not/exist")),
            ..ServerConfig::default()
        };
        assert!(config.resolve_directory().await.is_err());
    }

    #[tokio::test]
    async fn test_resolve_directory_rejects_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("index.html");
        fs::write(&file_path, "<html></html>")?;

        let mut config = ServerConfig {
            directory: Some(file_path),
            ..ServerConfig::default()
        };
        let err = config.resolve_directory().await.unwrap_err();
        assert!(err.to_string().contains("not a directory"));
        Ok(())
    }
}
