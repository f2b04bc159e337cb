use crate::commands::ClimbSummary;
use crate::error::{CairnError, Result};
use crate::model::{Climb, ClimbId};
use crate::store::ClimbStore;

/// The active climb with its record, re-read from the store. Never
/// cached by callers: every command that mutates the active climb goes
/// through here again.
pub fn active_climb<S: ClimbStore>(store: &S) -> Result<Option<(ClimbId, Climb)>> {
    match store.find_active()? {
        Some(id) => {
            let climb = store.read(&id)?;
            Ok(Some((id, climb)))
        }
        None => Ok(None),
    }
}

/// Summaries of every climb in the store, in id order. Directories
/// without a record yet are skipped, as in `find_active`.
pub fn summarize<S: ClimbStore>(store: &S) -> Result<Vec<ClimbSummary>> {
    let mut summaries = Vec::new();
    for id in store.list()? {
        match store.read(&id) {
            Ok(climb) => summaries.push(ClimbSummary {
                active: climb.is_active(),
                start_time: climb.start_time,
                end_time: climb.end_time,
                entry_count: climb.entries.len(),
                id,
            }),
            Err(CairnError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(summaries)
}
