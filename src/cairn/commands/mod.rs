use crate::model::{ClimbId, Entry};
use chrono::{DateTime, Utc};

pub mod clear;
pub mod end;
pub mod helpers;
pub mod list;
pub mod log_entry;
pub mod start;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One line of the `list` output.
#[derive(Debug, Clone)]
pub struct ClimbSummary {
    pub id: ClimbId,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub entry_count: usize,
    pub active: bool,
}

/// Structured result of a command, rendered by the CLI layer.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub climbs: Vec<ClimbSummary>,
    /// The climb the command acted on, if any.
    pub climb: Option<ClimbId>,
    /// The entry appended by `log_entry`, if any.
    pub entry: Option<Entry>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_climbs(mut self, climbs: Vec<ClimbSummary>) -> Self {
        self.climbs = climbs;
        self
    }
}
