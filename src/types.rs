//! Core types for langjson.
//! The importer produces [`ResourceRecord`]s; the exporter consumes them and reports
//! [`ExportEvent`]s.

use std::{collections::BTreeMap, fmt::Display, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Locale code of the default language. Invariant files carry no locale segment.
pub const INVARIANT_LOCALE: &str = "";

/// One localized string, identified by its storage group and key.
///
/// `group` is the base-relative path of the file family without locale or extension,
/// using `/` as the separator (e.g. `"views/home"`). `values` maps locale codes to text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceRecord {
    pub group: String,

    pub key: String,

    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl ResourceRecord {
    pub fn new(group: impl Into<String>, key: impl Into<String>) -> Self {
        ResourceRecord {
            group: group.into(),
            key: key.into(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style variant of [`ResourceRecord::set_text`].
    pub fn with_text(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.set_text(locale, text);
        self
    }

    pub fn text(&self, locale: &str) -> Option<&str> {
        self.values.get(locale).map(String::as_str)
    }

    /// Sets the text for `locale`, replacing any previous value.
    pub fn set_text(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        self.values.insert(locale.into(), text.into());
    }

    /// Locales this record carries text for, invariant first.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn invariant_text(&self) -> Option<&str> {
        self.text(INVARIANT_LOCALE)
    }

    /// A record is usable only when the invariant locale has non-empty text.
    pub fn is_valid(&self) -> bool {
        self.invariant_text().is_some_and(|text| !text.is_empty())
    }
}

impl Display for ResourceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ResourceRecord {{ group: {}, key: {}, locales: [{}] }}",
            self.group,
            self.key,
            self.values
                .keys()
                .map(|l| format!("{:?}", l))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportOutcome {
    Success,
    Error,
}

/// Result of processing one file during an export run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExportEvent {
    /// Target file.
    pub path: PathBuf,

    /// Project identifier supplied by the host.
    pub project: String,

    pub outcome: ExportOutcome,

    /// Failure description for [`ExportOutcome::Error`] events.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub message: Option<String>,
}

impl ExportEvent {
    pub fn success(project: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ExportEvent {
            path: path.into(),
            project: project.into(),
            outcome: ExportOutcome::Success,
            message: None,
        }
    }

    pub fn error(
        project: impl Into<String>,
        path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        ExportEvent {
            path: path.into(),
            project: project.into(),
            outcome: ExportOutcome::Error,
            message: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.outcome == ExportOutcome::Error
    }
}

/// Counts of written and failed files for one export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub written: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_validity_requires_invariant_text() {
        let record = ResourceRecord::new("app", "hello").with_text("de", "Hallo");
        assert!(!record.is_valid());

        let record = record.with_text(INVARIANT_LOCALE, "");
        assert!(!record.is_valid());

        let record = record.with_text(INVARIANT_LOCALE, "Hello");
        assert!(record.is_valid());
        assert_eq!(record.invariant_text(), Some("Hello"));
    }

    #[test]
    fn test_locales_are_ordered_with_invariant_first() {
        let record = ResourceRecord::new("app", "hello")
            .with_text("fr", "Bonjour")
            .with_text(INVARIANT_LOCALE, "Hello")
            .with_text("de", "Hallo");
        let locales: Vec<&str> = record.locales().collect();
        assert_eq!(locales, vec!["", "de", "fr"]);
    }

    #[test]
    fn test_set_text_overwrites() {
        let mut record = ResourceRecord::new("app", "hello");
        record.set_text("de", "Hallo");
        record.set_text("de", "Servus");
        assert_eq!(record.text("de"), Some("Servus"));
        assert_eq!(record.values.len(), 1);
    }

    #[test]
    fn test_export_event_serialization() {
        let event = ExportEvent::error("App", "/tmp/res/app.json", "denied");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["outcome"], "error");
        assert_eq!(json["message"], "denied");

        let event = ExportEvent::success("App", "/tmp/res/app.json");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["outcome"], "success");
        assert!(json.get("message").is_none());
    }
}
