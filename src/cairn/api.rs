//! # API Facade
//!
//! The single entry point for all journal operations. A thin facade over
//! the command layer: it dispatches and returns structured
//! `Result<CmdResult>` values, never touches stdout or stderr, and never
//! assumes a terminal. The CLI is just one possible client.
//!
//! `JournalApi` is generic over both collaborators:
//! - `S: ClimbStore` — `FileStore` in production, `InMemoryStore` in tests
//! - `L: LocationProvider` — `StubGps` in production, `Fixed` in tests

use crate::commands;
use crate::error::Result;
use crate::location::LocationProvider;
use crate::model::{ClimbId, EntryKind, PayloadSource};
use crate::store::ClimbStore;

pub use crate::commands::{ClimbSummary, CmdMessage, CmdResult, MessageLevel};

pub struct JournalApi<S: ClimbStore, L: LocationProvider> {
    store: S,
    location: L,
}

impl<S: ClimbStore, L: LocationProvider> JournalApi<S, L> {
    pub fn new(store: S, location: L) -> Self {
        Self { store, location }
    }

    /// Start a new climb. Fails with `AlreadyActive` if one is ongoing.
    pub fn start(&mut self, name: &str) -> Result<CmdResult> {
        commands::start::run(&mut self.store, &mut self.location, name)
    }

    /// Log one entry to the active climb, auto-starting a climb named
    /// `name_for_new` if none is active.
    pub fn log_entry(
        &mut self,
        kind: EntryKind,
        payload: PayloadSource,
        name_for_new: Option<&str>,
    ) -> Result<CmdResult> {
        commands::log_entry::run(
            &mut self.store,
            &mut self.location,
            kind,
            payload,
            name_for_new,
        )
    }

    /// End the active climb. Fails with `NoActiveClimb` if none.
    pub fn end(&mut self) -> Result<CmdResult> {
        commands::end::run(&mut self.store, &mut self.location)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// Delete every climb. Fails with `ActiveClimb` while one is ongoing.
    /// Callers own any confirmation prompt.
    pub fn clear_all(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.store)
    }

    /// Id of the active climb, if any. The CLI uses this to decide
    /// whether to prompt (for a new climb name, or before exiting).
    pub fn active_climb(&self) -> Result<Option<ClimbId>> {
        self.store.find_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CairnError;
    use crate::location::Fixed;
    use crate::model::Location;
    use crate::store::memory::InMemoryStore;

    fn api() -> JournalApi<InMemoryStore, Fixed> {
        JournalApi::new(InMemoryStore::new(), Fixed(Location(45.8325, 6.8642)))
    }

    #[test]
    fn start_log_end_flow() {
        let mut api = api();
        api.start("blanc").unwrap();
        assert!(api.active_climb().unwrap().is_some());

        api.log_entry(
            EntryKind::Text,
            PayloadSource::Text("col du midi".to_string()),
            None,
        )
        .unwrap();

        api.end().unwrap();
        assert!(api.active_climb().unwrap().is_none());

        let listed = api.list().unwrap();
        assert_eq!(listed.climbs.len(), 1);
        assert_eq!(listed.climbs[0].entry_count, 1);
        assert!(!listed.climbs[0].active);
    }

    #[test]
    fn at_most_one_active_climb_across_operations() {
        let mut api = api();
        for name in ["a", "b", "a"] {
            // start fails while active; end to make room
            if api.active_climb().unwrap().is_some() {
                assert!(matches!(
                    api.start(name),
                    Err(CairnError::AlreadyActive(_))
                ));
                api.end().unwrap();
            }
            api.start(name).unwrap();
            let listed = api.list().unwrap();
            assert_eq!(listed.climbs.iter().filter(|s| s.active).count(), 1);
        }
    }

    #[test]
    fn clear_all_requires_no_active_climb() {
        let mut api = api();
        api.start("blanc").unwrap();
        assert!(matches!(
            api.clear_all(),
            Err(CairnError::ActiveClimb(_))
        ));
        api.end().unwrap();
        api.clear_all().unwrap();
        assert!(api.list().unwrap().climbs.is_empty());
    }
}
