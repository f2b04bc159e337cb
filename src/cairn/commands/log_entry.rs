use crate::commands::{start, CmdMessage, CmdResult};
use crate::error::{CairnError, Result};
use crate::location::LocationProvider;
use crate::model::{Entry, EntryKind, PayloadSource};
use crate::store::ClimbStore;
use chrono::Utc;

/// Append one entry to the active climb.
///
/// With no climb active this auto-starts one through the same path as
/// `start`, using `name_for_new` (prompted for by the CLI). Without a
/// name to fall back on it fails with `NoActiveClimb`.
pub fn run<S: ClimbStore, L: LocationProvider>(
    store: &mut S,
    location: &mut L,
    kind: EntryKind,
    payload: PayloadSource,
    name_for_new: Option<&str>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let id = match store.find_active()? {
        Some(id) => id,
        None => {
            let name = name_for_new.ok_or(CairnError::NoActiveClimb)?;
            result.add_message(CmdMessage::info(
                "No active climb found. Starting a new climb...",
            ));
            let started = start::run(store, location, name)?;
            result.messages.extend(started.messages);
            started
                .climb
                .ok_or_else(|| CairnError::Store("auto-start produced no climb".to_string()))?
        }
    };

    let mut climb = store.read(&id)?;
    let time = Utc::now();
    let entry_location = location.current();
    let file_path = store.store_payload(&id, kind, &time, &payload)?;

    let entry = Entry {
        kind,
        time,
        location: entry_location,
        file_path,
    };
    climb.entries.push(entry.clone());
    // Full rewrite per append; entries are not persisted incrementally.
    store.write(&id, &climb)?;

    result.add_message(CmdMessage::success(format!(
        "{} entry logged at {}, location: {}",
        kind,
        time.to_rfc3339(),
        entry_location
    )));
    result.climb = Some(id);
    result.entry = Some(entry);
    Ok(result)
}
