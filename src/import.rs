//! Importer: folds a folder of per-locale JSON files into [`ResourceRecord`]s.

use std::{collections::BTreeMap, path::Path};

use walkdir::WalkDir;

use crate::{
    error::Error, formats::LocaleFile, naming::ResourceFileName, traits::Parser,
    types::ResourceRecord,
};

/// Reads every resource file under `base_dir` recursively.
///
/// One record is produced per (group, key), accumulating the text of every locale file
/// that contains the key. Records are returned sorted by group, then key, and include
/// those without invariant text; see [`retain_valid`].
///
/// A missing `base_dir` yields an empty collection. A file that is not a flat JSON object
/// of strings aborts the whole import with [`Error::MalformedResourceFile`].
pub fn import_resource_strings<P: AsRef<Path>>(base_dir: P) -> Result<Vec<ResourceRecord>, Error> {
    let base_dir = base_dir.as_ref();
    if !base_dir.is_dir() {
        tracing::debug!(base_dir = %base_dir.display(), "Resource directory does not exist");
        return Ok(Vec::new());
    }

    let mut records: BTreeMap<(String, String), ResourceRecord> = BTreeMap::new();
    let mut file_count = 0usize;

    let walker = WalkDir::new(base_dir).follow_links(true).sort_by_file_name();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(base_dir) else {
            continue;
        };
        let Some(name) = ResourceFileName::from_relative_path(relative) else {
            continue;
        };

        let file = LocaleFile::read_from(path).map_err(|e| match e {
            Error::Parse(source) => Error::malformed_file(path, source),
            other => other,
        })?;
        tracing::debug!(
            path = %path.display(),
            group = %name.group,
            locale = %name.locale,
            keys = file.len(),
            "Read resource file"
        );
        file_count += 1;

        for (key, text) in file.entries {
            records
                .entry((name.group.clone(), key))
                .or_insert_with_key(|(group, key)| ResourceRecord::new(group.clone(), key.clone()))
                .set_text(name.locale.clone(), text);
        }
    }

    tracing::debug!(
        base_dir = %base_dir.display(),
        files = file_count,
        records = records.len(),
        "Imported resource strings"
    );
    Ok(records.into_values().collect())
}

/// Drops records that have no non-empty invariant text.
pub fn retain_valid(records: Vec<ResourceRecord>) -> Vec<ResourceRecord> {
    records
        .into_iter()
        .filter(|record| {
            let valid = record.is_valid();
            if !valid {
                tracing::debug!(
                    group = %record.group,
                    key = %record.key,
                    "Skipping record without invariant text"
                );
            }
            valid
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let records = import_resource_strings(dir.path().join("missing")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_merges_locales_per_key() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("strings.json"),
            r#"{ "hello": "Hello", "bye": "Goodbye" }"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("strings.de-DE.json"),
            r#"{ "hello": "Hallo", "only_de": "Nur deutsch" }"#,
        )
        .unwrap();

        let records = import_resource_strings(dir.path()).unwrap();
        let keys: Vec<&str> = records.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["bye", "hello", "only_de"]);

        let hello = &records[1];
        assert_eq!(hello.group, "strings");
        assert_eq!(hello.text(""), Some("Hello"));
        assert_eq!(hello.text("de-DE"), Some("Hallo"));

        let only_de = &records[2];
        assert!(!only_de.is_valid());
        assert_eq!(retain_valid(records).len(), 2);
    }

    #[test]
    fn test_ignores_non_json_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "{ not json").unwrap();
        fs::write(dir.path().join("app.json"), r#"{ "a": "A" }"#).unwrap();

        let records = import_resource_strings(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].group, "app");
    }

    #[test]
    fn test_malformed_file_aborts_import() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.json"), r#"{ "a": "A" }"#).unwrap();
        fs::write(dir.path().join("app.de.json"), r#"{ "a": "#).unwrap();

        match import_resource_strings(dir.path()) {
            Err(Error::MalformedResourceFile { path, .. }) => {
                assert!(path.ends_with("app.de.json"));
            }
            other => panic!("expected malformed file error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_aborts_as_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.json"), b"{\"a\": \"\xff\xfe\xff\"}").unwrap();

        assert!(matches!(
            import_resource_strings(dir.path()),
            Err(Error::MalformedResourceFile { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_imported() {
        let dir = tempfile::tempdir().unwrap();
        let outside = dir.path().join("shared.json");
        fs::write(&outside, r#"{ "k": "v" }"#).unwrap();

        let base = dir.path().join("base");
        fs::create_dir(&base).unwrap();
        std::os::unix::fs::symlink(&outside, base.join("app.json")).unwrap();

        let records = import_resource_strings(&base).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].group, "app");
        assert_eq!(records[0].text(""), Some("v"));
    }
}
