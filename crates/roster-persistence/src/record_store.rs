//! Append-only record store over a single flat file.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use roster_models::Record;
use tracing::{debug, trace};

use crate::codec::{decode_line, encode_line, ParseResult};
use crate::error::{Result, StoreError};

/// File name used when no path is configured.
pub const DEFAULT_FILE_NAME: &str = "employee_records.txt";

/// Manages an append-only file of employee records.
///
/// Records are stored one per line, in write order:
/// ```text
/// 1|Alice|Eng
/// 2|Bob|Sales
/// ```
///
/// The store holds nothing but its path. Every call re-opens the file, so
/// separate stores over distinct paths are fully isolated. Appends are not
/// coordinated between writers; see [`SharedRecordStore`](crate::SharedRecordStore)
/// for in-process serialization.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Creates a new RecordStore backed by the given file.
    ///
    /// The file is not touched until the first append or scan.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a record as one new line at the end of the file.
    ///
    /// The file is created if it does not exist. The line is written with a
    /// single call, then flushed and synced before the handle is released.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidField`] without touching the file if a
    /// field contains the delimiter or a line break, and an I/O variant if
    /// the file cannot be opened or written. A failure mid-write may leave a
    /// partial line behind.
    pub fn append(&self, record: &Record) -> Result<()> {
        record.validate()?;
        let line = encode_line(record);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::Open {
                path: self.path.clone(),
                source,
            })?;

        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .and_then(|()| file.sync_data())
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), id = %record.id, "Appended record");
        Ok(())
    }

    /// Starts a scan over every line of the file, in file order.
    ///
    /// The returned [`Scan`] reads lazily. A missing file is not an error: it
    /// yields an empty scan. Calling this again starts over from the first
    /// line.
    ///
    /// # Errors
    /// Returns [`StoreError::Open`] if the file exists but cannot be opened.
    pub fn scan_all(&self) -> Result<Scan> {
        match File::open(&self.path) {
            Ok(file) => {
                debug!(path = %self.path.display(), "Scanning records");
                Ok(Scan::new(self.path.clone(), Some(BufReader::new(file))))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No record file yet");
                Ok(Scan::new(self.path.clone(), None))
            }
            Err(source) => Err(StoreError::Open {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

/// Lazy iterator over the lines of a record file.
///
/// Yields one [`ParseResult`] per line. A line ends at `\n`, `\r\n` or a
/// lone `\r`. Bytes that are not valid UTF-8 are replaced with U+FFFD before
/// the line is split, so only the field count decides whether it parses. A
/// read fault yields a single [`StoreError::Read`] and ends the scan.
#[derive(Debug)]
pub struct Scan {
    path: PathBuf,
    reader: Option<BufReader<File>>,
    buf: Vec<u8>,
    line_number: usize,
    skip_lf: bool,
}

impl Scan {
    fn new(path: PathBuf, reader: Option<BufReader<File>>) -> Self {
        Self {
            path,
            reader,
            buf: Vec::new(),
            line_number: 0,
            skip_lf: false,
        }
    }

    /// Returns the 1-based number of the most recently yielded line, or 0
    /// before the first.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn decode_buf(&self) -> ParseResult {
        decode_line(&String::from_utf8_lossy(&self.buf))
    }
}

/// Reads one line into `buf`, without its terminator.
///
/// Returns false at end of file when no bytes were read. `skip_lf` carries a
/// `\r` terminator over to the next call so a following `\n` is swallowed.
fn read_line(
    reader: &mut impl BufRead,
    buf: &mut Vec<u8>,
    skip_lf: &mut bool,
) -> io::Result<bool> {
    let mut read_any = false;
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        if *skip_lf {
            *skip_lf = false;
            if available[0] == b'\n' {
                reader.consume(1);
                continue;
            }
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(end) => {
                *skip_lf = available[end] == b'\r';
                buf.extend_from_slice(&available[..end]);
                reader.consume(end + 1);
                return Ok(true);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
                read_any = true;
            }
        }
    }
}

impl Iterator for Scan {
    type Item = Result<ParseResult>;

    fn next(&mut self) -> Option<Self::Item> {
        let reader = self.reader.as_mut()?;
        self.buf.clear();

        match read_line(reader, &mut self.buf, &mut self.skip_lf) {
            Ok(false) => {
                self.reader = None;
                None
            }
            Ok(true) => {
                self.line_number += 1;
                let result = self.decode_buf();
                trace!(line = self.line_number, ok = result.is_ok(), "Parsed line");
                Some(Ok(result))
            }
            Err(source) => {
                self.reader = None;
                Some(Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}

impl FusedIterator for Scan {}
