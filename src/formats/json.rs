//! Support for flat per-locale JSON resource files.
//!
//! Each file is a single JSON object mapping keys to strings:
//!
//! ```json
//! {
//!   "goodbye": "Goodbye",
//!   "hello": "Hello"
//! }
//! ```
//!
//! Keys are written in sorted order with two-space indentation so that rewriting
//! unchanged content is byte-stable.
use std::{
    collections::{BTreeMap, btree_map},
    fs::File,
    io::{BufRead, Read, Write},
    path::Path,
};

use crate::{error::Error, traits::Parser};

/// Full content of one resource file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleFile {
    pub entries: BTreeMap<String, String>,
}

impl LocaleFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Sets `key` to `text`, keeping every other entry.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl From<BTreeMap<String, String>> for LocaleFile {
    fn from(entries: BTreeMap<String, String>) -> Self {
        LocaleFile { entries }
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl LocaleFile {
    /// Decodes raw UTF-8 content. Blank input and a top-level `null` yield an empty file;
    /// invalid UTF-8 is a parse error like any other malformed JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes).trim_ascii();
        if content.is_empty() {
            return Ok(LocaleFile::new());
        }

        let entries: Option<BTreeMap<String, String>> = serde_json::from_slice(content)?;
        Ok(LocaleFile {
            entries: entries.unwrap_or_default(),
        })
    }
}

impl Parser for LocaleFile {
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        Self::from_slice(&content)
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, &self.entries)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// BOM-aware reading, so UTF-16 files saved by Windows editors load too.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        // Transcode on BOM; other content passes through as raw bytes
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .strip_bom(true)
            .build(file);

        let mut decoded = Vec::new();
        decoder.read_to_end(&mut decoded).map_err(Error::Io)?;

        Self::from_slice(&decoded)
    }
}
