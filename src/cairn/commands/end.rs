use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{CairnError, Result};
use crate::location::LocationProvider;
use crate::store::ClimbStore;
use chrono::Utc;

pub fn run<S: ClimbStore, L: LocationProvider>(
    store: &mut S,
    location: &mut L,
) -> Result<CmdResult> {
    let (id, mut climb) = helpers::active_climb(store)?.ok_or(CairnError::NoActiveClimb)?;

    let end_time = Utc::now();
    let end_location = location.current();
    climb.end_time = Some(end_time);
    climb.end_location = Some(end_location);
    store.write(&id, &climb)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Climb '{}' ended at {}, location: {}",
        id,
        end_time.to_rfc3339(),
        end_location
    )));
    result.climb = Some(id);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::start;
    use crate::location::Fixed;
    use crate::model::Location;
    use crate::store::memory::InMemoryStore;

    fn fixed() -> Fixed {
        Fixed(Location(27.9881, 86.925))
    }

    #[test]
    fn ends_the_active_climb() {
        let mut store = InMemoryStore::new();
        start::run(&mut store, &mut fixed(), "lhotse").unwrap();

        let result = run(&mut store, &mut fixed()).unwrap();

        let climb = store.read(&result.climb.unwrap()).unwrap();
        assert!(!climb.is_active());
        assert_eq!(climb.end_location, Some(Location(27.9881, 86.925)));
        assert!(store.find_active().unwrap().is_none());
    }

    #[test]
    fn fails_with_nothing_active_and_leaves_store_unchanged() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &mut fixed()).unwrap_err();
        assert!(matches!(err, CairnError::NoActiveClimb));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn ending_twice_fails_the_second_time() {
        let mut store = InMemoryStore::new();
        start::run(&mut store, &mut fixed(), "lhotse").unwrap();
        run(&mut store, &mut fixed()).unwrap();

        assert!(matches!(
            run(&mut store, &mut fixed()),
            Err(CairnError::NoActiveClimb)
        ));
    }
}
