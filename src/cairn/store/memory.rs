use super::{payload_rel_path, validate_name, ClimbStore};
use crate::error::{CairnError, Result};
use crate::model::{Climb, ClimbId, EntryKind, PayloadSource};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fs;

/// In-memory climb storage for tests. Mirrors the FileStore semantics:
/// `create` allocates an id with no record, `read` of an unwritten id is
/// `NotFound`, ids come back sorted.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    climbs: BTreeMap<String, Option<Climb>>,
    payloads: BTreeMap<String, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored payload bytes, for assertions.
    pub fn payload(&self, rel_path: &str) -> Option<&[u8]> {
        self.payloads.get(rel_path).map(|v| v.as_slice())
    }
}

impl ClimbStore for InMemoryStore {
    fn find_active(&self) -> Result<Option<ClimbId>> {
        for (id, record) in &self.climbs {
            if let Some(climb) = record {
                if climb.is_active() {
                    return Ok(Some(ClimbId::new(id.clone())));
                }
            }
        }
        Ok(None)
    }

    fn create(&mut self, name: &str) -> Result<ClimbId> {
        validate_name(name)?;

        let mut candidate = name.to_string();
        let mut counter = 0;
        while self.climbs.contains_key(&candidate) {
            counter += 1;
            candidate = format!("{}{}", name, counter);
        }

        self.climbs.insert(candidate.clone(), None);
        Ok(ClimbId::new(candidate))
    }

    fn read(&self, id: &ClimbId) -> Result<Climb> {
        match self.climbs.get(id.as_str()) {
            Some(Some(climb)) => Ok(climb.clone()),
            _ => Err(CairnError::NotFound(id.clone())),
        }
    }

    fn write(&mut self, id: &ClimbId, climb: &Climb) -> Result<()> {
        match self.climbs.get_mut(id.as_str()) {
            Some(record) => {
                *record = Some(climb.clone());
                Ok(())
            }
            None => Err(CairnError::NotFound(id.clone())),
        }
    }

    fn list(&self) -> Result<Vec<ClimbId>> {
        Ok(self.climbs.keys().map(|id| ClimbId::new(id.clone())).collect())
    }

    fn clear_all(&mut self) -> Result<()> {
        if let Some(id) = self.find_active()? {
            return Err(CairnError::ActiveClimb(id));
        }
        self.climbs.clear();
        self.payloads.clear();
        Ok(())
    }

    fn store_payload(
        &mut self,
        id: &ClimbId,
        kind: EntryKind,
        time: &DateTime<Utc>,
        payload: &PayloadSource,
    ) -> Result<String> {
        if !self.climbs.contains_key(id.as_str()) {
            return Err(CairnError::NotFound(id.clone()));
        }

        let bytes = match payload {
            PayloadSource::Text(s) | PayloadSource::Placeholder(s) => s.clone().into_bytes(),
            PayloadSource::FileRef(source) => fs::read(source).map_err(CairnError::Io)?,
        };

        let rel = payload_rel_path(id, kind, time);
        self.payloads.insert(rel.clone(), bytes);
        Ok(rel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Location;

    #[test]
    fn create_then_read_without_write_is_not_found() {
        let mut store = InMemoryStore::new();
        let id = store.create("eiger").unwrap();
        assert!(matches!(store.read(&id), Err(CairnError::NotFound(_))));
    }

    #[test]
    fn duplicate_names_get_numbered() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.create("a").unwrap().as_str(), "a");
        assert_eq!(store.create("a").unwrap().as_str(), "a1");
        assert_eq!(store.create("a").unwrap().as_str(), "a2");
    }

    #[test]
    fn clear_all_refuses_while_active() {
        let mut store = InMemoryStore::new();
        let id = store.create("eiger").unwrap();
        store
            .write(&id, &Climb::new(chrono::Utc::now(), Location(0.0, 0.0)))
            .unwrap();

        assert!(matches!(
            store.clear_all(),
            Err(CairnError::ActiveClimb(_))
        ));
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
