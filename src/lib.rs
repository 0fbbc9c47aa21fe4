#![forbid(unsafe_code)]
//! Synchronize localized string resources with a folder of per-locale JSON files.
//!
//! Files follow the `<group>.<locale>.json` convention, with `<group>.json` holding the
//! invariant (default) language. Importing folds the folder into [`ResourceRecord`]s
//! keyed by (group, key); exporting merges records back into the files, keeping keys
//! that were not part of the export.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langjson::{ExportEvent, JsonResourceProvider, ProviderOptions, retain_valid};
//!
//! let provider = JsonResourceProvider::new(ProviderOptions::new("Resources", "/home/dev/app")?);
//!
//! let records = retain_valid(provider.import("App")?);
//! provider.export("App", &records, &mut |event: ExportEvent| {
//!     if event.is_error() {
//!         eprintln!("{}: {:?}", event.path.display(), event.message);
//!     }
//! });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The building blocks are available on their own as well: [`resolve_base_directory`],
//! [`import_resource_strings`] and [`export_resource_strings`].

pub mod config;
pub mod error;
pub mod export;
pub mod formats;
pub mod import;
pub mod naming;
pub mod provider;
pub mod resolver;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    config::{ProviderOptions, ProviderSettings},
    error::Error,
    export::{export_resource_strings, export_resource_strings_to_vec},
    formats::LocaleFile,
    import::{import_resource_strings, retain_valid},
    naming::ResourceFileName,
    provider::{JSON_PROVIDER_INFO, JsonResourceProvider, ProviderInfo},
    resolver::resolve_base_directory,
    traits::ResultSink,
    types::{ExportEvent, ExportOutcome, ExportSummary, INVARIANT_LOCALE, ResourceRecord},
};
