use std::fmt;

use indexmap::IndexMap;
use paneforge_core::{Angles, Vec3};
use paneforge_geometry::Prism;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Document-unique entity id. Zero means "not assigned yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An I/O connection fired by the owning entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub output: String,
    pub target: String,
    pub input: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub params: String,
    #[serde(default)]
    pub delay: f64,
    /// Fire at most once, then remove the connection.
    #[serde(default)]
    pub only_once: bool,
}

impl Output {
    #[must_use]
    pub fn new(output: &str, target: &str, input: &str) -> Self {
        Self {
            output: output.to_string(),
            target: target.to_string(),
            input: input.to_string(),
            params: String::new(),
            delay: 0.0,
            only_once: false,
        }
    }

    #[must_use]
    pub fn once(mut self) -> Self {
        self.only_once = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub id: EntityId,
    pub classname: String,
    #[serde(default)]
    pub keys: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solids: Vec<Prism>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<Output>,
}

impl Entity {
    #[must_use]
    pub fn new(classname: &str) -> Self {
        Self {
            classname: classname.to_string(),
            ..Self::default()
        }
    }

    /// Keyvalue lookup; keys are case-insensitive as in the engine.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.keys
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Sets a keyvalue, replacing any existing key that differs only in case.
    pub fn set(&mut self, key: &str, value: impl fmt::Display) -> &mut Self {
        let value = value.to_string();
        match self.keys.keys().position(|k| k.eq_ignore_ascii_case(key)) {
            Some(idx) => {
                if let Some((_, slot)) = self.keys.get_index_mut(idx) {
                    *slot = value;
                }
            }
            None => {
                self.keys.insert(key.to_string(), value);
            }
        }
        self
    }

    #[must_use]
    pub fn targetname(&self) -> &str {
        self.get("targetname").unwrap_or("")
    }

    /// The `origin` keyvalue; missing means the world origin.
    pub fn origin(&self) -> Result<Vec3, Error> {
        match self.get("origin") {
            Some(raw) => Vec3::parse(raw).map_err(|e| self.invalid("origin", e)),
            None => Ok(Vec3::ZERO),
        }
    }

    /// The `angles` keyvalue; missing means no rotation.
    pub fn angles(&self) -> Result<Angles, Error> {
        match self.get("angles") {
            Some(raw) => Angles::parse(raw).map_err(|e| self.invalid("angles", e)),
            None => Ok(Angles::default()),
        }
    }

    pub fn add_out(&mut self, output: Output) -> &mut Self {
        self.outputs.push(output);
        self
    }

    fn invalid(&self, key: &str, err: impl fmt::Display) -> Error {
        Error::InvalidVector {
            entity: self.id,
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        let mut ent = Entity::new("func_instance");
        ent.set("TargetName", "glass_1");
        ent.set("targetname", "glass_2");
        assert_eq!(ent.keys.len(), 1);
        assert_eq!(ent.targetname(), "glass_2");
        assert_eq!(ent.get("TARGETNAME"), Some("glass_2"));
    }

    #[test]
    fn origin_defaults_and_errors() {
        let mut ent = Entity::new("func_instance");
        assert_eq!(ent.origin().unwrap(), Vec3::ZERO);
        ent.set("origin", "1 2");
        let err = ent.origin().unwrap_err().to_string();
        assert!(err.contains("\"origin\""), "{err}");
    }

    #[test]
    fn once_marks_output() {
        let out = Output::new("OnBreak", "pane-clip", "Kill").once();
        assert!(out.only_once);
        assert_eq!(out.delay, 0.0);
    }
}
