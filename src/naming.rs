//! File naming convention: `<group>.<locale>.json`, or `<group>.json` for the
//! invariant locale.
//!
//! The group is the file's path relative to the base directory with the locale
//! segment and extension removed. Groups always use `/` between folders, whatever the
//! host separator is, so that records are portable between machines.

use std::path::{Component, Path, PathBuf};

use crate::{error::Error, formats::RESOURCE_FILE_EXTENSION, types::INVARIANT_LOCALE};

/// Group and locale encoded in a resource file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceFileName {
    pub group: String,
    pub locale: String,
}

impl ResourceFileName {
    pub fn new(group: impl Into<String>, locale: impl Into<String>) -> Self {
        ResourceFileName {
            group: group.into(),
            locale: locale.into(),
        }
    }

    /// Derives group and locale from a path relative to the base directory.
    ///
    /// Returns `None` when the file is not a `.json` file or the path is not a plain
    /// relative path (e.g. contains `..`).
    ///
    /// ```rust
    /// use langjson::naming::ResourceFileName;
    ///
    /// let name = ResourceFileName::from_relative_path("folder/sub/greeting.fr.json").unwrap();
    /// assert_eq!(name.group, "folder/sub/greeting");
    /// assert_eq!(name.locale, "fr");
    ///
    /// let name = ResourceFileName::from_relative_path("greeting.json").unwrap();
    /// assert_eq!(name.group, "greeting");
    /// assert_eq!(name.locale, "");
    /// ```
    pub fn from_relative_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let mut folders = Vec::new();
        for component in path.as_ref().components() {
            match component {
                Component::Normal(part) => folders.push(part.to_str()?),
                Component::CurDir => {}
                _ => return None,
            }
        }
        let file_name = folders.pop()?;
        let (stem, locale) = split_file_name(file_name)?;

        folders.push(stem);
        Some(ResourceFileName {
            group: folders.join("/"),
            locale: locale.to_string(),
        })
    }

    /// Checks that the name maps to a file inside the base directory and reads back
    /// unchanged: every group segment is non-empty and not `.` or `..`, and the locale
    /// holds no path separator.
    pub fn validate(&self) -> Result<(), Error> {
        let bad_segment = self
            .group
            .split('/')
            .find(|segment| matches!(*segment, "" | "." | "..") || segment.contains('\\'));
        if let Some(segment) = bad_segment {
            return Err(Error::InvalidFileName(format!(
                "group `{}` has invalid segment `{}`",
                self.group, segment
            )));
        }
        if self.locale.contains(['/', '\\']) {
            return Err(Error::InvalidFileName(format!(
                "locale `{}` contains a path separator",
                self.locale
            )));
        }
        Ok(())
    }

    pub fn is_invariant(&self) -> bool {
        self.locale == INVARIANT_LOCALE
    }

    /// File name relative to the base directory, e.g. `views/home.de.json`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.group.split('/').collect();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let file_name = if self.is_invariant() {
            format!("{}.{}", file_name, RESOURCE_FILE_EXTENSION)
        } else {
            format!("{}.{}.{}", file_name, self.locale, RESOURCE_FILE_EXTENSION)
        };
        path.set_file_name(file_name);
        path
    }

    /// Absolute target path of this file under `base_dir`.
    pub fn file_path<P: AsRef<Path>>(&self, base_dir: P) -> PathBuf {
        base_dir.as_ref().join(self.relative_path())
    }
}

/// Splits `name.locale.json` into `("name", "locale")` and `name.json` into `("name", "")`.
fn split_file_name(file_name: &str) -> Option<(&str, &str)> {
    let (stem, extension) = file_name.rsplit_once('.')?;
    if !extension.eq_ignore_ascii_case(RESOURCE_FILE_EXTENSION) || stem.is_empty() {
        return None;
    }

    match stem.rsplit_once('.') {
        Some((group, locale)) if !group.is_empty() => Some((group, locale)),
        // `.fr.json` style names have no group in front of the dot
        _ => Some((stem, INVARIANT_LOCALE)),
    }
}
