//! Traits for file-level parsing and result reporting in langjson.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::{error::Error, types::ExportEvent};

/// A trait for parsing and writing localization resources from/to one file.
///
/// # Example
///
/// ```rust,no_run
/// use langjson::traits::Parser;
/// let file = langjson::formats::LocaleFile::read_from("res/app.de.json")?;
/// file.write_to("res/app.de.copy.json")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }
}

/// Receives one [`ExportEvent`] per processed file, synchronously and in order.
///
/// Any `FnMut(ExportEvent)` closure is a sink:
///
/// ```rust
/// use langjson::{ExportEvent, traits::ResultSink};
///
/// let mut events = Vec::new();
/// let mut sink = |event: ExportEvent| events.push(event);
/// sink.report(ExportEvent::success("App", "res/app.json"));
/// assert_eq!(events.len(), 1);
/// ```
pub trait ResultSink {
    fn report(&mut self, event: ExportEvent);
}

impl<F> ResultSink for F
where
    F: FnMut(ExportEvent),
{
    fn report(&mut self, event: ExportEvent) {
        self(event)
    }
}
