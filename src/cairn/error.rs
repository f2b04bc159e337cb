use crate::model::ClimbId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CairnError {
    #[error("Invalid climb name: {0}")]
    InvalidName(String),

    #[error("A climb is already active: '{0}'")]
    AlreadyActive(ClimbId),

    #[error("No active climb")]
    NoActiveClimb,

    #[error("Cannot clear climbs while '{0}' is active")]
    ActiveClimb(ClimbId),

    #[error("Climb not found: {0}")]
    NotFound(ClimbId),

    #[error("Climb record for '{id}' is not valid JSON")]
    Corrupt {
        id: ClimbId,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid entry type: {0}")]
    InvalidEntryType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, CairnError>;
