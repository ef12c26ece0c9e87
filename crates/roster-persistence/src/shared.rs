//! Record store shared between threads of one process.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use roster_models::Record;
use tracing::trace;

use crate::error::Result;
use crate::record_store::{RecordStore, Scan};

/// A [`RecordStore`] whose appends are serialized by a mutex.
///
/// Clones share the same lock. Only writers going through clones of one
/// `SharedRecordStore` are coordinated; other processes, or other stores over
/// the same path, are not. Scans take no lock and may observe the file
/// before or after a concurrent append.
#[derive(Debug, Clone)]
pub struct SharedRecordStore {
    store: RecordStore,
    write_lock: Arc<Mutex<()>>,
}

impl SharedRecordStore {
    /// Wraps a store for shared use.
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Appends a record while holding the write lock.
    ///
    /// A poisoned lock is recovered: the guarded state is `()`, and the file
    /// itself is re-opened by every append.
    pub fn append(&self, record: &Record) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        trace!(path = %self.store.path().display(), "Acquired write lock");
        self.store.append(record)
    }

    /// Starts an unlocked scan; see [`RecordStore::scan_all`].
    pub fn scan_all(&self) -> Result<Scan> {
        self.store.scan_all()
    }
}

impl From<RecordStore> for SharedRecordStore {
    fn from(store: RecordStore) -> Self {
        Self::new(store)
    }
}
