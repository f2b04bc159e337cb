use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CairnError, Result};
use crate::location::LocationProvider;
use crate::model::Climb;
use crate::store::ClimbStore;
use chrono::Utc;

pub fn run<S: ClimbStore, L: LocationProvider>(
    store: &mut S,
    location: &mut L,
    name: &str,
) -> Result<CmdResult> {
    // Re-check right before creating; activity state is never cached.
    if let Some(id) = store.find_active()? {
        return Err(CairnError::AlreadyActive(id));
    }

    let id = store.create(name)?;
    let start_time = Utc::now();
    let start_location = location.current();
    store.write(&id, &Climb::new(start_time, start_location))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Climb '{}' started at {}, location: {}",
        id,
        start_time.to_rfc3339(),
        start_location
    )));
    result.climb = Some(id);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Fixed;
    use crate::model::Location;
    use crate::store::memory::InMemoryStore;

    fn fixed() -> Fixed {
        Fixed(Location(46.5771, 7.9946))
    }

    #[test]
    fn starts_a_climb_with_empty_entries() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &mut fixed(), "eiger").unwrap();

        let id = result.climb.unwrap();
        let climb = store.read(&id).unwrap();
        assert!(climb.is_active());
        assert_eq!(climb.start_location, Location(46.5771, 7.9946));
        assert!(climb.entries.is_empty());
    }

    #[test]
    fn second_start_fails_and_leaves_store_unchanged() {
        let mut store = InMemoryStore::new();
        run(&mut store, &mut fixed(), "eiger").unwrap();

        let err = run(&mut store, &mut fixed(), "matterhorn").unwrap_err();
        assert!(matches!(err, CairnError::AlreadyActive(id) if id.as_str() == "eiger"));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn rejects_invalid_names() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &mut fixed(), "two words").unwrap_err();
        assert!(matches!(err, CairnError::InvalidName(_)));
        assert!(store.list().unwrap().is_empty());
    }
}
