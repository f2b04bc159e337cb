use crate::error::CairnError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Identifier of a climb, equal to its directory name under the store root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClimbId(String);

impl ClimbId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClimbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A coordinate pair, serialized as `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location(pub f64, pub f64);

impl Location {
    /// Builds a location with both coordinates rounded to 6 decimal places,
    /// the precision the records carry on disk.
    pub fn rounded(lat: f64, lon: f64) -> Self {
        Self((lat * 1e6).round() / 1e6, (lon * 1e6).round() / 1e6)
    }

    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lon(&self) -> f64 {
        self.1
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.0, self.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Text,
    Audio,
    Image,
}

impl EntryKind {
    pub const ALL: [EntryKind; 3] = [EntryKind::Text, EntryKind::Audio, EntryKind::Image];

    /// Payload subdirectory under `journal_entries/`.
    pub fn subdir(&self) -> &'static str {
        match self {
            EntryKind::Text => "text",
            EntryKind::Audio => "audio",
            EntryKind::Image => "images",
        }
    }

    /// File extension for stored payloads of this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            EntryKind::Text => ".txt",
            EntryKind::Audio => ".mp3",
            EntryKind::Image => ".jpg",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryKind::Text => "text",
            EntryKind::Audio => "audio",
            EntryKind::Image => "image",
        };
        f.write_str(s)
    }
}

impl FromStr for EntryKind {
    type Err = CairnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(EntryKind::Text),
            "audio" => Ok(EntryKind::Audio),
            "image" => Ok(EntryKind::Image),
            other => Err(CairnError::InvalidEntryType(other.to_string())),
        }
    }
}

/// One journal record within a climb. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub time: DateTime<Utc>,
    pub location: Location,
    /// Path of the stored payload, relative to the store root.
    pub file_path: String,
}

/// A climb record as persisted in `climb_data.json`.
///
/// The `end_time` key is absent from the JSON while the climb is active;
/// its presence is the sole active/closed discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Climb {
    pub start_time: DateTime<Utc>,
    pub start_location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_location: Option<Location>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Climb {
    pub fn new(start_time: DateTime<Utc>, start_location: Location) -> Self {
        Self {
            start_time,
            start_location,
            end_time: None,
            end_location: None,
            entries: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Where an entry's payload comes from, before the store resolves it
/// into a file. Real capture devices would produce `FileRef`s.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadSource {
    Text(String),
    FileRef(PathBuf),
    Placeholder(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_climb_serializes_without_end_time_key() {
        let climb = Climb::new(Utc::now(), Location::rounded(46.5, 7.9));
        let json = serde_json::to_string(&climb).unwrap();
        assert!(!json.contains("end_time"));
        assert!(!json.contains("end_location"));
    }

    #[test]
    fn closed_climb_round_trips() {
        let mut climb = Climb::new(Utc::now(), Location::rounded(46.5, 7.9));
        climb.entries.push(Entry {
            kind: EntryKind::Text,
            time: Utc::now(),
            location: Location::rounded(-12.345678, 99.000001),
            file_path: "ridge/journal_entries/text/x.txt".to_string(),
        });
        climb.end_time = Some(Utc::now());
        climb.end_location = Some(Location::rounded(46.6, 8.0));

        let json = serde_json::to_string(&climb).unwrap();
        let parsed: Climb = serde_json::from_str(&json).unwrap();
        assert_eq!(climb, parsed);
    }

    #[test]
    fn entry_kind_serializes_lowercase() {
        let json = serde_json::to_string(&EntryKind::Image).unwrap();
        assert_eq!(json, "\"image\"");
    }

    #[test]
    fn entry_kind_parses_with_whitespace_and_case() {
        assert_eq!(" Audio ".parse::<EntryKind>().unwrap(), EntryKind::Audio);
        assert!(matches!(
            "video".parse::<EntryKind>(),
            Err(CairnError::InvalidEntryType(_))
        ));
    }

    #[test]
    fn location_rounds_to_six_decimals() {
        let loc = Location::rounded(1.23456789, -2.98765432);
        assert_eq!(loc, Location(1.234568, -2.987654));
    }

    #[test]
    fn location_serializes_as_pair() {
        let json = serde_json::to_string(&Location(1.5, -2.5)).unwrap();
        assert_eq!(json, "[1.5,-2.5]");
    }
}
