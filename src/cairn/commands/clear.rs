use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ClimbStore;

/// Delete every climb. The store enforces the active-climb guard;
/// asking the user "are you sure" is the CLI's job, not ours.
pub fn run<S: ClimbStore>(store: &mut S) -> Result<CmdResult> {
    store.clear_all()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All climbs have been cleared."));
    Ok(result)
}
