//! Tab-separated table writer.
use std::fs;
use std::fs::File;
use std::path::Path;

use csv::WriterBuilder;

use crate::corpus::CleanRow;
use crate::error::Error;

/// Output schema shared by per-corpus and combined tables.
pub const OUTPUT_COLUMNS: [&str; 5] = ["language", "year", "period", "date", "sentence"];

/// Writes [CleanRow]s to one tab-separated file with a header row.
///
/// The header is written at creation time, so an empty corpus still
/// produces a well-formed (header-only) table.
pub struct TableWriter {
    writer: csv::Writer<File>,
}

impl TableWriter {
    /// Create the output file, its parent directories, and the header row.
    pub fn create(path: &Path) -> Result<Self, Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(OUTPUT_COLUMNS)?;
        Ok(Self { writer })
    }

    /// Append rows. Absent years and dates serialize as empty fields.
    pub fn write_rows(&mut self, rows: &[CleanRow]) -> Result<(), Error> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }
}
