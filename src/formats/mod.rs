//! On-disk formats understood by langjson.
//!
//! Resource folders hold one flat JSON object per (group, locale); see [`json`].

pub mod json;

// Reexporting the formats for easier access
pub use json::LocaleFile;

/// Extension of every resource file, without the leading dot.
pub const RESOURCE_FILE_EXTENSION: &str = "json";
