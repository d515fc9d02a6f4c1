use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use crate::error::{GeneticError, Result, ResultExt};

use super::IterationRecord;

/// Receives one [`IterationRecord`] per main-loop iteration.
///
/// A failing sink never aborts a run: the engine logs the first failure,
/// keeps it for the run result and carries on.
pub trait StatisticsSink {
    fn record(&mut self, record: &IterationRecord) -> Result<()>;

    /// Called once when the run ends.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: StatisticsSink + ?Sized> StatisticsSink for &mut S {
    fn record(&mut self, record: &IterationRecord) -> Result<()> {
        (**self).record(record)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl StatisticsSink for NullSink {
    fn record(&mut self, _record: &IterationRecord) -> Result<()> {
        Ok(())
    }
}

/// Keeps every record in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<IterationRecord>,
    finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_records(self) -> Vec<IterationRecord> {
        self.records
    }
}

impl StatisticsSink for MemorySink {
    fn record(&mut self, record: &IterationRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}

/// Writes records as semicolon-separated rows, header first.
///
/// The header is written exactly once, before the first row or on `finish`
/// for a run that produced no rows. Every write or flush failure is reported
/// as `GeneticError::Sink`.
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .delimiter(b';')
                .from_writer(writer),
            header_written: false,
        }
    }

    /// Flushes buffered rows and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| GeneticError::Sink(format!("Failed to flush: {}", e.error())))
    }

    fn ensure_header(&mut self) -> Result<()> {
        if !self.header_written {
            self.writer
                .write_record(IterationRecord::COLUMNS)
                .map_err(|e| GeneticError::Sink(format!("Failed to write header: {}", e)))?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl CsvSink<File> {
    /// Creates (or truncates) the file at `path`, creating missing parent
    /// directories.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create directory {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create {}", path.display()))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> StatisticsSink for CsvSink<W> {
    fn record(&mut self, record: &IterationRecord) -> Result<()> {
        self.ensure_header()?;
        self.writer
            .write_record(record.to_fields())
            .map_err(|e| GeneticError::Sink(format!("Failed to write row: {}", e)))
    }

    fn finish(&mut self) -> Result<()> {
        self.ensure_header()?;
        self.writer
            .flush()
            .map_err(|e| GeneticError::Sink(format!("Failed to flush: {}", e)))
    }
}
