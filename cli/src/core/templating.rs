//! # Elevated Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Thin wrapper around the Tera engine. Templates are registered from
//! in-memory strings (they are compiled into the binary) and rendered by name
//! with a flat string context.
//!
//! ## Examples
//!
//! ```rust
//! let templates = TemplateSet::from_raw(&[("greeting", "Hello {{ name }}")])?;
//!
//! let mut context = HashMap::new();
//! context.insert("name".to_string(), "Ada".to_string());
//!
//! assert_eq!(templates.render("greeting", &context)?, "Hello Ada");
//! ```
//!
use crate::core::error::{AppError, Result};
use anyhow::anyhow;
use std::collections::HashMap;
use tera::Tera;
use tracing::debug;

/// A set of named templates compiled once and rendered many times.
#[derive(Debug)]
pub struct TemplateSet {
    tera: Tera,
}

impl TemplateSet {
    /// Parses every `(name, source)` pair. Fails on the first syntax error.
    ///
    /// Autoescaping applies to names ending in `.html`, so values inserted into
    /// HTML bodies are escaped while plain-text templates are left alone.
    pub fn from_raw(templates: &[(&str, &str)]) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied())
            .map_err(|e| {
                anyhow!(AppError::Template { source: e }).context("Failed to parse templates")
            })?;
        debug!("Registered {} templates", templates.len());
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context_map: &HashMap<String, String>) -> Result<String> {
        let context = tera::Context::from_serialize(context_map).map_err(|e| {
            anyhow!(AppError::Template { source: e })
                .context("Failed to create Tera context from map")
        })?;
        self.tera.render(name, &context).map_err(|e| {
            anyhow!(AppError::Template { source: e })
                .context(format!("Tera rendering failed for template '{}'", name))
        })
    }
}
