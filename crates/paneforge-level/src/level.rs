use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Entity, EntityId, Error};

/// The mutable level document a compile pass works on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Level {
    #[serde(default)]
    entities: Vec<Entity>,
    #[serde(skip)]
    next_id: u64,
}

impl Level {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document, assigning ids to entities that have none.
    pub fn from_entities(entities: Vec<Entity>) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        for ent in entities.iter().filter(|e| e.id != EntityId(0)) {
            if !seen.insert(ent.id) {
                return Err(Error::DuplicateId(ent.id));
            }
        }
        let mut level = Self {
            next_id: seen.iter().map(|id| id.0).max().unwrap_or(0),
            entities,
        };
        for idx in 0..level.entities.len() {
            if level.entities[idx].id == EntityId(0) {
                level.entities[idx].id = level.alloc_id();
            }
        }
        Ok(level)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        let raw: Level = serde_yaml::from_str(yaml)?;
        Self::from_entities(raw.entities)
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let raw: Level = serde_json::from_str(json)?;
        Self::from_entities(raw.entities)
    }

    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn alloc_id(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId(self.next_id)
    }

    /// Appends a new entity and returns it for filling in.
    pub fn create_ent(&mut self, classname: &str) -> &mut Entity {
        let mut ent = Entity::new(classname);
        ent.id = self.alloc_id();
        self.entities.push(ent);
        let last = self.entities.len() - 1;
        &mut self.entities[last]
    }

    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn find_by_name(&self, targetname: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.targetname() == targetname)
    }

    /// Entities whose classname matches, case-insensitively.
    pub fn by_class<'a>(&'a self, classname: &'a str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.entities
            .iter()
            .filter(move |e| e.classname.eq_ignore_ascii_case(classname))
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(idx))
    }

    /// Removes every listed entity, returning how many were present.
    pub fn remove_all(&mut self, ids: &[EntityId]) -> usize {
        let doomed: HashSet<EntityId> = ids.iter().copied().collect();
        let before = self.entities.len();
        self.entities.retain(|e| !doomed.contains(&e.id));
        before - self.entities.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
