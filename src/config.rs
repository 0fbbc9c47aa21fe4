//! Host-supplied configuration for the JSON resource provider.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{error::Error, resolver::resolve_base_directory};

/// Where resource files live: `base_location`, absolute or relative to `root`.
///
/// The base location is validated whenever it is set, so a constructed value always
/// carries a non-blank location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOptions {
    base_location: String,
    root: PathBuf,
}

impl ProviderOptions {
    /// Creates options, rejecting an empty or whitespace-only base location.
    pub fn new(base_location: impl Into<String>, root: impl Into<PathBuf>) -> Result<Self, Error> {
        let base_location = validate_base_location(base_location.into())?;
        Ok(ProviderOptions {
            base_location,
            root: root.into(),
        })
    }

    /// Replaces the base location.
    pub fn with_base_location(mut self, base_location: impl Into<String>) -> Result<Self, Error> {
        self.base_location = validate_base_location(base_location.into())?;
        Ok(self)
    }

    /// Replaces the root directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn base_location(&self) -> &str {
        &self.base_location
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute base directory for import and export.
    pub fn base_directory(&self) -> Result<PathBuf, Error> {
        resolve_base_directory(&self.base_location, &self.root)
    }

    /// Loads options from a JSON settings document such as
    /// `{ "baseLocation": "Resources", "root": "/home/dev/solution" }`.
    pub fn from_json_str(s: &str) -> Result<Self, Error> {
        let settings: ProviderSettings = serde_json::from_str(s)?;
        ProviderOptions::try_from(settings)
    }
}

/// Serialized form of [`ProviderOptions`], as stored by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    #[serde(default)]
    pub base_location: String,

    #[serde(default)]
    pub root: PathBuf,
}

impl TryFrom<ProviderSettings> for ProviderOptions {
    type Error = Error;

    fn try_from(value: ProviderSettings) -> Result<Self, Self::Error> {
        ProviderOptions::new(value.base_location, value.root)
    }
}

impl From<&ProviderOptions> for ProviderSettings {
    fn from(value: &ProviderOptions) -> Self {
        ProviderSettings {
            base_location: value.base_location.clone(),
            root: value.root.clone(),
        }
    }
}

fn validate_base_location(base_location: String) -> Result<String, Error> {
    if base_location.trim().is_empty() {
        return Err(Error::invalid_configuration(
            "base location must not be empty",
        ));
    }
    Ok(base_location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_blank_location() {
        assert!(matches!(
            ProviderOptions::new("  ", "/solution"),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ProviderOptions::new("", "/solution"),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_with_base_location_validates() {
        let options = ProviderOptions::new("Resources", "/solution").unwrap();
        assert!(options.clone().with_base_location(" ").is_err());

        let options = options.with_base_location("Strings").unwrap();
        assert_eq!(options.base_location(), "Strings");
        assert_eq!(options.root(), Path::new("/solution"));
    }

    #[cfg(unix)]
    #[test]
    fn test_base_directory_resolves_against_root() {
        let options = ProviderOptions::new("Resources", "/solution").unwrap();
        assert_eq!(
            options.base_directory().unwrap(),
            PathBuf::from("/solution/Resources")
        );

        let options = options.with_root("/other");
        assert_eq!(
            options.base_directory().unwrap(),
            PathBuf::from("/other/Resources")
        );
    }

    #[test]
    fn test_from_json_settings() {
        let options =
            ProviderOptions::from_json_str(r#"{ "baseLocation": "i18n", "root": "/repo" }"#)
                .unwrap();
        assert_eq!(options.base_location(), "i18n");
        assert_eq!(options.root(), Path::new("/repo"));
    }

    #[test]
    fn test_from_json_settings_missing_location() {
        assert!(matches!(
            ProviderOptions::from_json_str(r#"{ "root": "/repo" }"#),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            ProviderOptions::from_json_str("not json"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_settings_round_trip() {
        let options = ProviderOptions::new("i18n", "/repo").unwrap();
        let settings = ProviderSettings::from(&options);
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"baseLocation\":\"i18n\""));
        assert_eq!(ProviderOptions::from_json_str(&json).unwrap(), options);
    }
}
