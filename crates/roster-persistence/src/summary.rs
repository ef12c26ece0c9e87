//! Aggregated view of a completed scan.

use roster_models::Record;

use crate::codec::ParseResult;
use crate::error::Result;
use crate::record_store::Scan;

/// What a scan found, in broad terms.
///
/// An I/O failure during the scan is the third case beside these and is
/// reported as an error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The file is missing or holds no lines.
    NoRecords,
    /// Lines exist but none of them parsed.
    AllMalformed,
    /// At least one record parsed.
    Records,
}

/// Records and malformed lines collected from a full scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Parsed records, in file order.
    pub records: Vec<Record>,
    /// Malformed lines as `(line_number, raw_text)`, in file order.
    pub malformed: Vec<(usize, String)>,
}

impl ScanSummary {
    /// Drains a scan into a summary.
    ///
    /// Malformed lines are tagged with [`Scan::line_number`].
    ///
    /// # Errors
    /// Returns the first read error; nothing collected so far is returned.
    pub fn collect(mut scan: Scan) -> Result<Self> {
        let mut summary = Self::default();
        while let Some(result) = scan.next() {
            match result? {
                ParseResult::Ok(record) => summary.records.push(record),
                ParseResult::Malformed(line) => {
                    summary.malformed.push((scan.line_number(), line))
                }
            }
        }
        Ok(summary)
    }

    /// Total number of lines seen.
    pub fn total_lines(&self) -> usize {
        self.records.len() + self.malformed.len()
    }

    /// Classifies the scan.
    pub fn outcome(&self) -> ScanOutcome {
        if !self.records.is_empty() {
            ScanOutcome::Records
        } else if !self.malformed.is_empty() {
            ScanOutcome::AllMalformed
        } else {
            ScanOutcome::NoRecords
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_store::RecordStore;
    use std::fs;
    use tempfile::tempdir;

    fn summarize(contents: &str) -> ScanSummary {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.txt");
        fs::write(&path, contents).unwrap();
        ScanSummary::collect(RecordStore::new(&path).scan_all().unwrap()).unwrap()
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("records.txt"));

        let summary = ScanSummary::collect(store.scan_all().unwrap()).unwrap();

        assert_eq!(summary.outcome(), ScanOutcome::NoRecords);
        assert_eq!(summary.total_lines(), 0);
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(summarize("").outcome(), ScanOutcome::NoRecords);
    }

    #[test]
    fn test_all_malformed() {
        let summary = summarize("garbage\n1|2\n");
        assert_eq!(summary.outcome(), ScanOutcome::AllMalformed);
        assert_eq!(
            summary.malformed,
            vec![(1, "garbage".to_string()), (2, "1|2".to_string())]
        );
    }

    #[test]
    fn test_mixed_lines_keep_positions() {
        let summary = summarize("1|Alice|Eng\ngarbage\n2|Bob|Sales\n");

        assert_eq!(summary.outcome(), ScanOutcome::Records);
        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.malformed, vec![(2, "garbage".to_string())]);
        assert_eq!(summary.total_lines(), 3);
    }

    #[test]
    fn test_positions_count_carriage_return_lines() {
        let summary = summarize("1|A|B\rbad\r\n2|C|D\n\n");

        assert_eq!(summary.records.len(), 2);
        assert_eq!(
            summary.malformed,
            vec![(2, "bad".to_string()), (4, String::new())]
        );
    }

    #[test]
    fn test_read_error_propagates() {
        let dir = tempdir().unwrap();
        let store = RecordStore::new(dir.path());

        let err = ScanSummary::collect(store.scan_all().unwrap()).unwrap_err();

        assert!(matches!(err, crate::error::StoreError::Read { .. }));
    }
}
