//! Persistence layer for Roster.
//!
//! This crate provides an append-only flat-file record store. Each record is
//! one `id|name|department` line; a scan parses every line and reports the
//! ones that do not split into three fields instead of failing.
//!
//! # Example
//!
//! ```no_run
//! use roster_models::Record;
//! use roster_persistence::{ParseResult, RecordStore};
//!
//! let store = RecordStore::new("/tmp/employee_records.txt");
//! store.append(&Record::new("7", "Dana", "Ops")).unwrap();
//!
//! for result in store.scan_all().unwrap() {
//!     match result.unwrap() {
//!         ParseResult::Ok(record) => println!("{}", record),
//!         ParseResult::Malformed(line) => eprintln!("skipped: {}", line),
//!     }
//! }
//! ```

pub mod codec;
pub mod error;
pub mod record_store;
pub mod shared;
pub mod summary;

pub use codec::{decode_line, encode_line, ParseResult, FIELD_COUNT};
pub use error::{Result, StoreError};
pub use record_store::{RecordStore, Scan, DEFAULT_FILE_NAME};
pub use shared::SharedRecordStore;
pub use summary::{ScanOutcome, ScanSummary};
