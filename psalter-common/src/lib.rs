//! # Psalter Common Library
//!
//! Shared code for the psalter manuscript comparison services including:
//! - Compact wire-format types and the variant codec
//! - Per-manuscript statistics and rankings
//! - Pairwise similarity analysis and cluster extraction
//! - Manuscript metadata and verse translation types
//! - Configuration loading

pub mod codec;
pub mod config;
pub mod error;
pub mod metadata;
pub mod similarity;
pub mod stats;

pub use error::{Error, Result};
