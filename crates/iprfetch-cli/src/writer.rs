//! Append-mode CSV output
//!
//! Opens the output per invocation so partial progress survives a mid-run
//! kill. Never truncates and never deduplicates existing content.

use crate::error::Result;
use crate::extract::FeatureRecord;
use std::fs::OpenOptions;
use std::path::Path;

/// Append the given records to the output CSV, creating it if absent.
/// No header row is written.
pub fn append_records<P: AsRef<Path>>(path: P, records: &[FeatureRecord]) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(accession: &str, name: &str) -> FeatureRecord {
        FeatureRecord {
            accession: accession.to_string(),
            name: name.to_string(),
            source_database: "interpro".to_string(),
            entry_type: "domain".to_string(),
            integrated: "-".to_string(),
            signatures: "-".to_string(),
            go_terms: "-".to_string(),
            protein_accession: "P12345".to_string(),
            protein_length: "350".to_string(),
            locations: String::new(),
        }
    }

    fn read_rows(path: &Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();

        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_writes_ten_columns_no_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        append_records(&path, &[record("IPR000001", "Kringle")]).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[0][0], "IPR000001");
    }

    #[test]
    fn test_append_never_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        append_records(&path, &[record("IPR000001", "Kringle")]).unwrap();
        append_records(&path, &[record("IPR000002", "Fibronectin")]).unwrap();
        // Re-appending the same record duplicates it
        append_records(&path, &[record("IPR000001", "Kringle")]).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "IPR000001");
        assert_eq!(rows[1][0], "IPR000002");
        assert_eq!(rows[2][0], "IPR000001");
    }

    #[test]
    fn test_quoting_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let tricky = "Kringle, \"clotting\" domain";
        append_records(&path, &[record("IPR000001", tricky)]).unwrap();

        let rows = read_rows(&path);
        assert_eq!(rows[0][1], tricky);
    }

    #[test]
    fn test_empty_batch_still_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        append_records(&path, &[]).unwrap();

        assert!(path.exists());
        assert!(read_rows(&path).is_empty());
    }
}
