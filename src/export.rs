//! Exporter: writes [`ResourceRecord`]s into a folder of per-locale JSON files.
//!
//! Existing files are loaded once per run and the exported values are overlaid onto
//! them, so keys that are not part of the export keep their current text. Every touched
//! file is then rewritten in full.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

use crate::{
    formats::LocaleFile,
    naming::ResourceFileName,
    traits::{Parser, ResultSink},
    types::{ExportEvent, ExportSummary, ResourceRecord},
};

/// Loaded file contents for one export run, in first-touched order.
#[derive(Debug, Default)]
struct LocaleFileCache {
    order: Vec<PathBuf>,
    files: HashMap<PathBuf, LocaleFile>,
}

impl LocaleFileCache {
    fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn get_mut(&mut self, path: &Path) -> Option<&mut LocaleFile> {
        self.files.get_mut(path)
    }

    fn insert(&mut self, path: PathBuf, file: LocaleFile) {
        if self.files.insert(path.clone(), file).is_none() {
            self.order.push(path);
        }
    }

    fn into_files(mut self) -> impl Iterator<Item = (PathBuf, LocaleFile)> {
        self.order.into_iter().filter_map(move |path| {
            let file = self.files.remove(&path)?;
            Some((path, file))
        })
    }
}

/// Writes `records` below `base_dir`, reporting one event per file to `sink`.
///
/// # Parameters
/// - `base_dir`: Absolute resource directory. No directories are created.
/// - `project`: Host project identifier, copied into every event.
/// - `records`: Records to persist; every locale of every record is written.
/// - `sink`: Receives load failures as they happen, then one success or error event
///   per written file.
///
/// # Returns
///
/// Counts of written and failed files. The export itself never fails: a file that
/// cannot be loaded is reported once and skipped for the rest of the run, and a file
/// that cannot be written is reported and left behind.
pub fn export_resource_strings<'a, P, I, S>(
    base_dir: P,
    project: &str,
    records: I,
    sink: &mut S,
) -> ExportSummary
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a ResourceRecord>,
    S: ResultSink + ?Sized,
{
    let base_dir = base_dir.as_ref();
    let mut cache = LocaleFileCache::default();
    let mut failed_paths: HashSet<PathBuf> = HashSet::new();
    let mut summary = ExportSummary::default();

    for record in records {
        for (locale, text) in &record.values {
            let name = ResourceFileName::new(record.group.as_str(), locale.as_str());
            let path = name.file_path(base_dir);

            if failed_paths.contains(&path) {
                continue;
            }

            if let Err(e) = name.validate() {
                tracing::warn!(path = %path.display(), "Rejected resource file: {}", e);
                sink.report(ExportEvent::error(project, &path, e.to_string()));
                summary.failed += 1;
                failed_paths.insert(path);
                continue;
            }

            if !cache.contains(&path) {
                match load_existing(&path) {
                    Ok(file) => cache.insert(path.clone(), file),
                    Err(message) => {
                        tracing::warn!(
                            path = %path.display(),
                            group = %record.group,
                            "Failed to load resource file: {}",
                            message
                        );
                        sink.report(ExportEvent::error(project, &path, message));
                        summary.failed += 1;
                        failed_paths.insert(path);
                        continue;
                    }
                }
            }
            if let Some(file) = cache.get_mut(&path) {
                file.insert(record.key.as_str(), text.as_str());
            }
        }
    }

    for (path, file) in cache.into_files() {
        match file.write_to(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), keys = file.len(), "Wrote resource file");
                sink.report(ExportEvent::success(project, path));
                summary.written += 1;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to write resource file: {}", e);
                sink.report(ExportEvent::error(project, path, e.to_string()));
                summary.failed += 1;
            }
        }
    }

    tracing::debug!(
        base_dir = %base_dir.display(),
        project,
        written = summary.written,
        failed = summary.failed,
        "Exported resource strings"
    );
    summary
}

/// Convenience wrapper around [`export_resource_strings`] collecting the events.
pub fn export_resource_strings_to_vec<'a, P, I>(
    base_dir: P,
    project: &str,
    records: I,
) -> Vec<ExportEvent>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a ResourceRecord>,
{
    let mut events = Vec::new();
    export_resource_strings(base_dir, project, records, &mut |event: ExportEvent| {
        events.push(event)
    });
    events
}

/// Current content of `path`, or an empty file when nothing exists there yet.
fn load_existing(path: &Path) -> Result<LocaleFile, String> {
    if !path.exists() {
        return Ok(LocaleFile::new());
    }
    LocaleFile::read_from(path).map_err(|e| e.to_string())
}
