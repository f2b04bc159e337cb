//! # Storage Layer
//!
//! The [`ClimbStore`] trait abstracts how climb records and entry
//! payloads are persisted, so the session logic can be tested without a
//! filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production file-based storage, one directory per
//!   climb under the store root:
//!
//!   ```text
//!   <store_root>/
//!   ├── <climb_id>/
//!   │   ├── climb_data.json
//!   │   └── journal_entries/
//!   │       ├── text/<timestamp>.txt
//!   │       ├── audio/<timestamp>.mp3
//!   │       └── images/<timestamp>.jpg
//!   ```
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests, same
//!   semantics, no persistence.
//!
//! ## Consistency model
//!
//! The store is the single source of truth. Callers never cache climb
//! state across operations: every command asks `find_active` again and
//! re-reads the record it is about to mutate. At most one climb in the
//! store lacks `end_time`; `find_active` relies on that invariant and
//! returns the first match of a deterministic (sorted) scan.

use crate::error::Result;
use crate::model::{Climb, ClimbId, EntryKind, PayloadSource};
use chrono::{DateTime, Utc};

pub mod fs;
pub mod memory;

/// Abstract interface for climb storage.
pub trait ClimbStore {
    /// The climb currently lacking an `end_time`, if any. Scans all
    /// climbs in sorted id order; climbs without a record yet are
    /// skipped, corrupt records fail the scan.
    fn find_active(&self) -> Result<Option<ClimbId>>;

    /// Allocate a climb id and its payload directories. `name` must be
    /// non-empty and contain no whitespace; if it is already taken, the
    /// smallest unused positive suffix is appended (`a`, `a1`, `a2`).
    ///
    /// No record exists for the new id until [`ClimbStore::write`] is
    /// called.
    fn create(&mut self, name: &str) -> Result<ClimbId>;

    /// Deserialize the climb's record.
    fn read(&self, id: &ClimbId) -> Result<Climb>;

    /// Serialize and atomically replace the climb's record.
    fn write(&mut self, id: &ClimbId, climb: &Climb) -> Result<()>;

    /// All climb ids, sorted.
    fn list(&self) -> Result<Vec<ClimbId>>;

    /// Delete every climb and leave the store root present and empty.
    /// Fails with `ActiveClimb` while a climb is active. Irreversible;
    /// any user confirmation happens above the store.
    fn clear_all(&mut self) -> Result<()>;

    /// Resolve `payload` into a stored file under the climb's
    /// subdirectory for `kind`, named by `time`. Returns the stored
    /// path relative to the store root.
    fn store_payload(
        &mut self,
        id: &ClimbId,
        kind: EntryKind,
        time: &DateTime<Utc>,
        payload: &PayloadSource,
    ) -> Result<String>;
}

/// Filesystem-safe rendering of an entry timestamp, used as the payload
/// file stem. Microsecond precision keeps names unique enough within a
/// single-process session.
pub fn timestamp_key(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H-%M-%S%.6f").to_string()
}

/// Store-root-relative path for a payload file.
pub(crate) fn payload_rel_path(id: &ClimbId, kind: EntryKind, time: &DateTime<Utc>) -> String {
    format!(
        "{}/journal_entries/{}/{}{}",
        id,
        kind.subdir(),
        timestamp_key(time),
        kind.extension()
    )
}

/// Shared name validation for [`ClimbStore::create`].
pub(crate) fn validate_name(name: &str) -> Result<()> {
    use crate::error::CairnError;

    if name.is_empty() {
        return Err(CairnError::InvalidName("name is empty".to_string()));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(CairnError::InvalidName(format!(
            "'{}' contains whitespace",
            name
        )));
    }
    Ok(())
}
