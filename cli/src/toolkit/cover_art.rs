//! Cover art generator demo. Every prompt yields the same stock image.

use crate::core::error::{AppError, Result};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};

pub const STOCK_COVER_URL: &str =
    "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=600";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArtStyle {
    #[default]
    Photorealistic,
    Illustrated,
    Abstract,
    Minimalist,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverArtRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub style: ArtStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverArt {
    pub url: String,
    pub prompt: String,
    pub style: ArtStyle,
}

pub fn generate_cover_art(request: &CoverArtRequest) -> Result<CoverArt> {
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(anyhow!(AppError::InvalidRequest(
            "A description of the artwork is required".to_string()
        )));
    }
    Ok(CoverArt {
        url: STOCK_COVER_URL.to_string(),
        prompt: prompt.to_string(),
        style: request.style,
    })
}
