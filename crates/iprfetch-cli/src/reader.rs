//! Query CSV reader
//!
//! Streams identifiers out of the input CSV: first column of every row,
//! remaining columns discarded. No header handling and no validation of the
//! identifier format.

use crate::error::Result;
use std::fs::File;
use std::path::Path;

/// Lazy reader over the identifiers in a query CSV
pub struct QueryReader {
    records: csv::StringRecordsIntoIter<File>,
}

impl QueryReader {
    /// Open a query CSV. Failure here is fatal to the run.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            records: reader.into_records(),
        })
    }
}

impl Iterator for QueryReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|record| {
            let record = record?;
            Ok(record.get(0).unwrap_or_default().to_string())
        })
    }
}
