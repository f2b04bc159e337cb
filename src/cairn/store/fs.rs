use super::{payload_rel_path, validate_name, ClimbStore};
use crate::error::{CairnError, Result};
use crate::model::{Climb, ClimbId, EntryKind, PayloadSource};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

const RECORD_FILENAME: &str = "climb_data.json";
const RECORD_TMP_FILENAME: &str = ".climb_data.json.tmp";
const ENTRIES_DIRNAME: &str = "journal_entries";

/// File-backed climb storage. One directory per climb under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn climb_dir(&self, id: &ClimbId) -> PathBuf {
        self.root.join(id.as_str())
    }

    fn record_path(&self, id: &ClimbId) -> PathBuf {
        self.climb_dir(id).join(RECORD_FILENAME)
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(CairnError::Io)?;
        }
        Ok(())
    }
}

impl ClimbStore for FileStore {
    fn find_active(&self) -> Result<Option<ClimbId>> {
        for id in self.list()? {
            match self.read(&id) {
                Ok(climb) if climb.is_active() => return Ok(Some(id)),
                Ok(_) => {}
                // A directory created but never written is not a climb yet
                Err(CairnError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }

    fn create(&mut self, name: &str) -> Result<ClimbId> {
        validate_name(name)?;
        self.ensure_root()?;

        let mut candidate = name.to_string();
        let mut counter = 0;
        while self.root.join(&candidate).exists() {
            counter += 1;
            candidate = format!("{}{}", name, counter);
        }

        let climb_dir = self.root.join(&candidate);
        for kind in EntryKind::ALL {
            fs::create_dir_all(climb_dir.join(ENTRIES_DIRNAME).join(kind.subdir()))
                .map_err(CairnError::Io)?;
        }

        Ok(ClimbId::new(candidate))
    }

    fn read(&self, id: &ClimbId) -> Result<Climb> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(CairnError::NotFound(id.clone()));
        }
        let content = fs::read_to_string(&path).map_err(CairnError::Io)?;
        serde_json::from_str(&content).map_err(|source| CairnError::Corrupt {
            id: id.clone(),
            source,
        })
    }

    fn write(&mut self, id: &ClimbId, climb: &Climb) -> Result<()> {
        let climb_dir = self.climb_dir(id);
        if !climb_dir.exists() {
            return Err(CairnError::NotFound(id.clone()));
        }

        let content = serde_json::to_string_pretty(climb).map_err(CairnError::Serialization)?;

        // Write-to-temp-and-rename so a half-written record is never
        // observable under the canonical name.
        let tmp_path = climb_dir.join(RECORD_TMP_FILENAME);
        fs::write(&tmp_path, content).map_err(CairnError::Io)?;
        fs::rename(&tmp_path, self.record_path(id)).map_err(CairnError::Io)?;

        Ok(())
    }

    fn list(&self) -> Result<Vec<ClimbId>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(CairnError::Io)? {
            let entry = entry.map_err(CairnError::Io)?;
            if entry.path().is_dir() {
                ids.push(ClimbId::new(entry.file_name().to_string_lossy()));
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn clear_all(&mut self) -> Result<()> {
        if let Some(id) = self.find_active()? {
            return Err(CairnError::ActiveClimb(id));
        }

        if self.root.exists() {
            fs::remove_dir_all(&self.root).map_err(CairnError::Io)?;
        }
        fs::create_dir_all(&self.root).map_err(CairnError::Io)?;
        Ok(())
    }

    fn store_payload(
        &mut self,
        id: &ClimbId,
        kind: EntryKind,
        time: &DateTime<Utc>,
        payload: &PayloadSource,
    ) -> Result<String> {
        if !self.climb_dir(id).exists() {
            return Err(CairnError::NotFound(id.clone()));
        }

        let rel = payload_rel_path(id, kind, time);
        let path = self.root.join(&rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(CairnError::Io)?;
        }

        match payload {
            PayloadSource::Text(s) | PayloadSource::Placeholder(s) => {
                fs::write(&path, s).map_err(CairnError::Io)?;
            }
            PayloadSource::FileRef(source) => {
                fs::copy(source, &path).map_err(CairnError::Io)?;
            }
        }

        Ok(rel)
    }
}
