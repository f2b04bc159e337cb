use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ClimbStore;

pub fn run<S: ClimbStore>(store: &S) -> Result<CmdResult> {
    let summaries = helpers::summarize(store)?;
    if summaries.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No climbs found."));
        return Ok(result);
    }
    Ok(CmdResult::default().with_climbs(summaries))
}
