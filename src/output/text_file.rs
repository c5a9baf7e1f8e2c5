//! Plain-text section output
//!
//! Each section is written as the link on one line, the body on the next,
//! followed by a blank line.

use crate::output::traits::{OutputError, OutputResult, Section, SectionSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes sections to any `Write` destination in the plain-text format
pub struct TextFileOutput<W: Write> {
    writer: BufWriter<W>,
    sections_written: usize,
}

impl TextFileOutput<File> {
    /// Creates (or truncates) the output file at `path`
    ///
    /// # Returns
    ///
    /// * `Ok(TextFileOutput)` - File opened for writing
    /// * `Err(OutputError::Create)` - The file could not be created
    pub fn create(path: &Path) -> OutputResult<Self> {
        let file = File::create(path).map_err(|source| OutputError::Create {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Self::new(file))
    }
}

impl<W: Write> TextFileOutput<W> {
    /// Wraps an existing writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            sections_written: 0,
        }
    }

    /// Number of sections written so far
    pub fn sections_written(&self) -> usize {
        self.sections_written
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> SectionSink for TextFileOutput<W> {
    fn write_section(&mut self, section: &Section) -> OutputResult<()> {
        self.writer.write_all(format_section(section).as_bytes())?;
        self.writer.flush()?;
        self.sections_written += 1;
        Ok(())
    }

    fn finalize(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Formats a single section
///
/// # Example
///
/// ```
/// use web_spider::output::{format_section, Section, SectionBody};
///
/// let section = Section::new("http://ex.com/a", SectionBody::NoReadableText);
/// assert_eq!(format_section(&section), "http://ex.com/a\n[No readable text]\n\n");
/// ```
pub fn format_section(section: &Section) -> String {
    format!("{}\n{}\n\n", section.url, section.body)
}
