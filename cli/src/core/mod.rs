//! # Elevated Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by every command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Tera rendering for the onboarding email templates
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{AppError, Result}; // For error handling
//! use crate::core::templating; // For rendering named templates
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
