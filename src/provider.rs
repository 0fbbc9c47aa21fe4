//! Host-facing entry points for the JSON resource provider.
//!
//! A host configures a [`JsonResourceProvider`] once and then calls
//! [`JsonResourceProvider::import`] and [`JsonResourceProvider::export`] per project.

use crate::{
    config::ProviderOptions,
    error::Error,
    export::export_resource_strings,
    import::import_resource_strings,
    traits::ResultSink,
    types::{ExportEvent, ExportSummary, ResourceRecord},
};

/// Describes a resource provider to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Storage hint shown next to the configured location.
    pub storage_type: &'static str,
}

pub const JSON_PROVIDER_INFO: ProviderInfo = ProviderInfo {
    id: "json",
    display_name: "JSON folder",
    description: "Per-locale JSON files named <group>.<locale>.json below a base folder.",
    storage_type: "folder",
};

/// Synchronizes resource records with a folder of per-locale JSON files.
#[derive(Debug, Clone)]
pub struct JsonResourceProvider {
    options: ProviderOptions,
}

impl JsonResourceProvider {
    pub fn new(options: ProviderOptions) -> Self {
        JsonResourceProvider { options }
    }

    pub fn info(&self) -> ProviderInfo {
        JSON_PROVIDER_INFO
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }

    /// Reconfigures the provider. Takes effect for the next import or export.
    pub fn set_options(&mut self, options: ProviderOptions) {
        self.options = options;
    }

    /// Reads every record below the configured base directory.
    ///
    /// Records without invariant text are included; use [`crate::import::retain_valid`]
    /// to drop them.
    pub fn import(&self, project: &str) -> Result<Vec<ResourceRecord>, Error> {
        let base_dir = self.options.base_directory()?;
        let _span =
            tracing::debug_span!("import", project, base_dir = %base_dir.display()).entered();
        import_resource_strings(&base_dir)
    }

    /// Writes `records` below the configured base directory.
    ///
    /// Never fails: if the base directory cannot be resolved, a single error event is
    /// reported against the configured location.
    pub fn export<S>(
        &self,
        project: &str,
        records: &[ResourceRecord],
        sink: &mut S,
    ) -> ExportSummary
    where
        S: ResultSink + ?Sized,
    {
        let base_dir = match self.options.base_directory() {
            Ok(base_dir) => base_dir,
            Err(e) => {
                tracing::warn!(project, "Failed to resolve resource directory: {}", e);
                sink.report(ExportEvent::error(
                    project,
                    self.options.base_location(),
                    e.to_string(),
                ));
                return ExportSummary {
                    written: 0,
                    failed: 1,
                };
            }
        };

        let _span =
            tracing::debug_span!("export", project, base_dir = %base_dir.display()).entered();
        export_resource_strings(&base_dir, project, records, sink)
    }
}
