//! # AI Toolkit Demos
//!
//! File: cli/src/toolkit/mod.rs
//!
//! ## Overview
//!
//! The "AI Powerhouse Toolkit" generators. None of them run a model: the copy
//! writer fills fixed templates and the cover art generator returns a stock
//! image. Each result is computed up front, validated, and then released after
//! an artificial generation delay (see `common::pacing`).
//!
//! Invalid requests fail immediately, before any delay.
//!
use crate::common::pacing;
use crate::core::config::ToolkitConfig;
use crate::core::error::Result;
use tracing::info;

pub mod copywriter;
pub mod cover_art;

pub use copywriter::{CopyKind, CopyRequest, GeneratedCopy};
pub use cover_art::{ArtStyle, CoverArt, CoverArtRequest};

/// Runs the copy writer with the configured generation delay.
pub async fn write_copy(config: &ToolkitConfig, request: &CopyRequest) -> Result<GeneratedCopy> {
    let copy = copywriter::generate_copy(request)?;
    info!(kind = ?copy.kind, "generating marketing copy");
    Ok(pacing::delayed(config.copy_delay(), copy).await)
}

/// Runs the cover art generator with the configured generation delay.
pub async fn create_cover_art(
    config: &ToolkitConfig,
    request: &CoverArtRequest,
) -> Result<CoverArt> {
    let art = cover_art::generate_cover_art(request)?;
    info!(style = ?art.style, "generating cover art");
    Ok(pacing::delayed(config.cover_art_delay(), art).await)
}
