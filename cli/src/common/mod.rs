//! # Elevated Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! Shared helpers used by more than one feature area.
//!

/// Artificial delays that make canned answers feel generated.
pub mod pacing;
